use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use taskmaster_core::{TaskError, TaskResult};

const FORMAT_VERSION: u32 = 1;
const FILE_NAME: &str = "storage.json";

/// File-backed key-value store
///
/// All keys live in one JSON document. Every write rewrites the whole
/// document through `AtomicWriter`, so a batch (`save_many`,
/// `remove_many`) lands as a single atomic replace.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

/// On-disk document layout
#[derive(Debug, Serialize, Deserialize)]
struct StorageDocument {
    version: u32,
    saved_at: DateTime<Utc>,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Store backed by `storage.json` inside `data_dir`
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(FILE_NAME))
    }

    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_entries(&self) -> TaskResult<BTreeMap<String, String>> {
        let Some(bytes) = AtomicWriter::read_if_exists(&self.path)? else {
            return Ok(BTreeMap::new());
        };

        let document: StorageDocument = match serde_json::from_slice(&bytes) {
            Ok(document) => document,
            Err(e) => {
                // An unreadable document is treated as empty so the next write
                // replaces it instead of failing forever.
                tracing::warn!(
                    "Ignoring unreadable storage file {}: {}",
                    self.path.display(),
                    e
                );
                return Ok(BTreeMap::new());
            }
        };

        if document.version != FORMAT_VERSION {
            return Err(TaskError::Serialization(format!(
                "Unsupported storage format version: {}",
                document.version
            )));
        }

        Ok(document.entries)
    }

    fn write_entries(&self, entries: BTreeMap<String, String>) -> TaskResult<()> {
        let document = StorageDocument {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            entries,
        };
        let json_bytes = serde_json::to_vec_pretty(&document)
            .map_err(|e| TaskError::Serialization(e.to_string()))?;

        AtomicWriter::write_atomic(&self.path, &json_bytes)?;

        tracing::info!(
            "Saved {} bytes to {}",
            json_bytes.len(),
            self.path.display()
        );
        Ok(())
    }

    fn modify<F>(&self, change: F) -> TaskResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self.write_lock.lock();
        let mut entries = self.read_entries()?;
        change(&mut entries);
        self.write_entries(entries)
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, key: &str) -> TaskResult<Option<String>> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> TaskResult<()> {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn save_many(&self, batch: Vec<(String, String)>) -> TaskResult<()> {
        self.modify(|entries| entries.extend(batch))
    }

    fn remove_many(&self, keys: Vec<String>) -> TaskResult<()> {
        self.modify(|entries| {
            for key in &keys {
                entries.remove(key);
            }
        })
    }
}
