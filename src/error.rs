use thiserror::Error;

pub type Result<T> = std::result::Result<T, TodoError>;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Persisted item list under '{key}' could not be parsed: {source}")]
    CorruptedData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Item label must not be empty")]
    EmptyLabel,

    #[error("Invalid status filter '{0}'. Valid filters: all, active, done")]
    InvalidStatusFilter(String),
}
