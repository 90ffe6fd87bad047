use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// String-keyed JSON document store, the engine's stand-in for browser
/// local storage. Persistence is always caller-triggered: services never
/// write through this port on their own.
pub trait StatePort: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    fn put(&self, key: &str, value: Value) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
