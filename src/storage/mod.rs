use crate::error::Result;
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// Key-value slot storage for persisting the serialized item list
///
/// Values are written and replaced wholesale; there are no partial updates.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Reads the value stored under `key`, or `None` when the slot is empty
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites the slot under `key`
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Clears the slot under `key`; clearing an empty slot is not an error
    async fn remove_item(&self, key: &str) -> Result<()>;
}
