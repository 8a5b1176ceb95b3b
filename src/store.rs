//! The item store: owner of the canonical item list and the transient view
//! state, kept in step with a [`Storage`] slot.

use crate::{
    config::StoreConfig,
    domain::{visible_items, FilterState, Item, ItemCounts, ItemKey, ItemList, StatusFilter},
    error::{Result, TodoError},
    storage::Storage,
};
use tracing::{debug, error, info};

/// Canonical to-do list plus its filter state
///
/// Every effective mutation is written back to storage before the call
/// returns. Operations on a key that is not in the list change nothing, write
/// nothing and report `Ok(false)`.
pub struct ItemStore<S: Storage> {
    storage: S,
    config: StoreConfig,
    items: ItemList,
    filter: FilterState,
}

impl<S: Storage> ItemStore<S> {
    /// Loads the persisted list, seeding the slot first when it is empty
    ///
    /// A slot that holds something other than a valid item list is a fatal
    /// [`TodoError::CorruptedData`].
    pub async fn initialize(storage: S, config: StoreConfig) -> Result<Self> {
        let items = load_or_seed(&storage, &config).await?;

        Ok(Self {
            storage,
            config,
            items,
            filter: FilterState::default(),
        })
    }

    /// Re-reads the persisted list, replacing the in-memory one
    ///
    /// An empty slot is seeded again, as on [`ItemStore::initialize`]. On a
    /// corrupted slot the in-memory list is left untouched.
    pub async fn reload(&mut self) -> Result<()> {
        self.items = load_or_seed(&self.storage, &self.config).await?;
        Ok(())
    }

    /// Adds a new item at the top of the list and returns its key
    pub async fn add(&mut self, label: impl Into<String>) -> Result<ItemKey> {
        let label = label.into();
        if !self.config.allow_empty_labels && label.trim().is_empty() {
            return Err(TodoError::EmptyLabel);
        }

        let item = Item::new(label);
        let key = item.key.clone();
        debug!(key = %key, "adding item");
        self.items.prepend(item);
        self.persist().await?;
        Ok(key)
    }

    /// Flips `done` on the matching item; `Ok(false)` when the key is unknown
    pub async fn toggle_done(&mut self, key: &ItemKey) -> Result<bool> {
        if !self.items.toggle_done(key) {
            debug!(key = %key, "toggle_done: no such item");
            return Ok(false);
        }
        self.persist().await?;
        Ok(true)
    }

    /// Flips `important` on the matching item; `Ok(false)` when the key is unknown
    pub async fn toggle_important(&mut self, key: &ItemKey) -> Result<bool> {
        if !self.items.toggle_important(key) {
            debug!(key = %key, "toggle_important: no such item");
            return Ok(false);
        }
        self.persist().await?;
        Ok(true)
    }

    /// Removes the matching item; `Ok(false)` when the key is unknown
    pub async fn delete(&mut self, key: &ItemKey) -> Result<bool> {
        if self.items.remove(key).is_none() {
            debug!(key = %key, "delete: no such item");
            return Ok(false);
        }
        self.persist().await?;
        Ok(true)
    }

    /// Sets the case-insensitive search text
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.set_search(search);
    }

    /// Clears the search so the status filter applies to the full list
    pub fn clear_search(&mut self) {
        self.filter.set_search(String::new());
    }

    /// Sets the status filter
    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Items passing the current search and status filter, in list order
    pub fn visible(&self) -> Vec<&Item> {
        visible_items(&self.items, &self.filter)
    }

    /// Done/left tallies over the full list, ignoring any filter
    pub fn counts(&self) -> ItemCounts {
        self.items.counts()
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn get(&self, key: &ItemKey) -> Option<&Item> {
        self.items.get(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    async fn persist(&self) -> Result<()> {
        write_slot(&self.storage, &self.config.storage_key, &self.items).await
    }
}

/// Loads the list from the configured slot, writing the seed list when empty
async fn load_or_seed<S: Storage>(storage: &S, config: &StoreConfig) -> Result<ItemList> {
    match read_slot(storage, &config.storage_key).await? {
        Some(items) => {
            debug!(
                key = %config.storage_key,
                count = items.len(),
                "loaded persisted items"
            );
            Ok(items)
        }
        None => {
            let seed = ItemList::from_labels(config.seed_labels.iter().cloned());
            info!(
                key = %config.storage_key,
                count = seed.len(),
                "storage empty, writing seed items"
            );
            write_slot(storage, &config.storage_key, &seed).await?;
            Ok(seed)
        }
    }
}

/// Reads and parses the slot; an absent or empty slot yields `None`
async fn read_slot<S: Storage>(storage: &S, key: &str) -> Result<Option<ItemList>> {
    let raw = match storage.get_item(key).await? {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(None),
    };

    match serde_json::from_str::<ItemList>(&raw) {
        Ok(items) => Ok(Some(items)),
        Err(source) => {
            error!(key = %key, error = %source, "persisted item list is corrupted");
            Err(TodoError::CorruptedData {
                key: key.to_string(),
                source,
            })
        }
    }
}

async fn write_slot<S: Storage>(storage: &S, key: &str, items: &ItemList) -> Result<()> {
    let json = serde_json::to_string(items)?;
    storage.set_item(key, &json).await?;
    debug!(key = %key, count = items.len(), "persisted items");
    Ok(())
}
