use crate::serialization::JsonSerializer;
use crate::store::InMemoryStore;
use crate::traits::{KeyValueStore, Serializer};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use taskmaster_core::TaskResult;

/// Typed access to a `KeyValueStore`.
///
/// Loads never fail: a missing key, a blank value, a read error or a value
/// that does not decode all come back as `None`, and the caller substitutes
/// its default. Anything other than a plain miss is logged. Writes propagate
/// their errors.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn KeyValueStore>,
    serializer: JsonSerializer,
}

impl Storage {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            serializer: JsonSerializer,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }

    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.backend
    }

    fn load_raw(&self, key: &str) -> Option<String> {
        match self.backend.load(key) {
            Ok(Some(raw)) if !raw.trim().is_empty() => Some(raw),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Failed to read '{}', using default: {}", key, e);
                None
            }
        }
    }

    /// Decode the JSON value under `key`
    pub fn load_json<T>(&self, key: &str) -> Option<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let raw = self.load_raw(key)?;
        match Serializer::<T>::deserialize(&self.serializer, &raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Malformed value under '{}', using default: {}", key, e);
                None
            }
        }
    }

    /// Parse a plain string value under `key`. A JSON-quoted string is
    /// accepted too.
    pub fn load_parsed<T>(&self, key: &str) -> Option<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.load_raw(key)?;
        let trimmed = raw.trim();
        let unquoted = trimmed
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(trimmed);
        match unquoted.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Malformed value under '{}', using default: {}", key, e);
                None
            }
        }
    }

    pub fn encode<T>(&self, value: &T) -> TaskResult<String>
    where
        T: Serialize + DeserializeOwned,
    {
        Serializer::<T>::serialize(&self.serializer, value)
    }

    pub fn save_json<T>(&self, key: &str, value: &T) -> TaskResult<()>
    where
        T: Serialize + DeserializeOwned,
    {
        let raw = self.encode(value)?;
        self.backend.save(key, &raw)?;
        tracing::debug!("Persisted '{}' ({} bytes)", key, raw.len());
        Ok(())
    }

    pub fn save_raw(&self, key: &str, value: &str) -> TaskResult<()> {
        self.backend.save(key, value)?;
        tracing::debug!("Persisted '{}'", key);
        Ok(())
    }

    pub fn save_many(&self, entries: Vec<(String, String)>) -> TaskResult<()> {
        let count = entries.len();
        self.backend.save_many(entries)?;
        tracing::debug!("Persisted {} entries in one write", count);
        Ok(())
    }

    pub fn remove_many(&self, keys: &[&str]) -> TaskResult<()> {
        self.backend
            .remove_many(keys.iter().map(|k| k.to_string()).collect())?;
        tracing::debug!("Removed keys {:?}", keys);
        Ok(())
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}
