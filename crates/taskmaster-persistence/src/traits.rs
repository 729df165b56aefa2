use taskmaster_core::TaskResult;

/// Trait for a flat string key-value store, the persistence backend every
/// store writes through.
///
/// Implementations are synchronous: a call returns once the value is durable
/// (or held, for in-memory backends).
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, `None` if absent
    fn load(&self, key: &str) -> TaskResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn save(&self, key: &str, value: &str) -> TaskResult<()>;

    /// Store several entries in a single write
    fn save_many(&self, entries: Vec<(String, String)>) -> TaskResult<()>;

    /// Remove several keys in a single write. Missing keys are ignored.
    fn remove_many(&self, keys: Vec<String>) -> TaskResult<()>;
}

/// Trait for encoding values stored under a key
pub trait Serializer<T>: Send + Sync {
    fn serialize(&self, data: &T) -> TaskResult<String>;

    fn deserialize(&self, raw: &str) -> TaskResult<T>;
}
