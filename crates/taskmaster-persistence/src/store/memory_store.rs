use crate::traits::KeyValueStore;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use taskmaster_core::TaskResult;

/// Process-local key-value store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn load(&self, key: &str) -> TaskResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> TaskResult<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn save_many(&self, entries: Vec<(String, String)>) -> TaskResult<()> {
        self.entries.lock().extend(entries);
        Ok(())
    }

    fn remove_many(&self, keys: Vec<String>) -> TaskResult<()> {
        let mut entries = self.entries.lock();
        for key in keys {
            entries.remove(&key);
        }
        Ok(())
    }
}
