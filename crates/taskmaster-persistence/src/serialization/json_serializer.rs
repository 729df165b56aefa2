use crate::traits::Serializer;
use taskmaster_core::{TaskError, TaskResult};

/// Compact JSON, the format every collection and flag is stored in
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned> Serializer<T> for JsonSerializer {
    fn serialize(&self, data: &T) -> TaskResult<String> {
        serde_json::to_string(data).map_err(|e| TaskError::Serialization(e.to_string()))
    }

    fn deserialize(&self, raw: &str) -> TaskResult<T> {
        serde_json::from_str(raw).map_err(|e| TaskError::Serialization(e.to_string()))
    }
}
