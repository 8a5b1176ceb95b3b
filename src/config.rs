use serde::{Deserialize, Serialize};

/// Item store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Storage slot holding the serialized item list
    pub storage_key: String,
    /// Labels written as the initial list when the slot is empty
    pub seed_labels: Vec<String>,
    /// Whether `add` accepts a blank label
    pub allow_empty_labels: bool,
}

impl StoreConfig {
    pub const DEFAULT_STORAGE_KEY: &'static str = "items";

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_seed_labels<I, L>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.seed_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn reject_empty_labels(mut self) -> Self {
        self.allow_empty_labels = false;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: Self::DEFAULT_STORAGE_KEY.to_string(),
            seed_labels: vec![
                "Have fun".to_string(),
                "Spread Empathy".to_string(),
                "Generate Value".to_string(),
            ],
            allow_empty_labels: true,
        }
    }
}
