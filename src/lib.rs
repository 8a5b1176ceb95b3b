//! # Todo Core
//!
//! State management for a single to-do list: adding, completing, flagging,
//! deleting, searching and filtering short text items, with the list mirrored
//! to a key-value storage slot after every change.
//!
//! The crate has no UI. A front end drives an [`ItemStore`], renders
//! [`ItemStore::visible`] and [`ItemStore::counts`], and forwards user intents
//! back to the store.

pub mod config;
pub mod domain;
pub mod error;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use config::StoreConfig;
pub use domain::{
    filter::{visible_items, FilterState, ItemCounts, StatusFilter},
    item::{Item, ItemKey},
    item_list::ItemList,
};
pub use error::{Result, TodoError};
pub use storage::{MemoryStorage, Storage};
#[cfg(feature = "file-storage")]
pub use storage::FileStorage;
pub use store::ItemStore;
