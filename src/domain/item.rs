use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier for a to-do item
///
/// Freshly created keys are random v4 UUIDs. Keys read back from storage are
/// kept verbatim, whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(String);

impl ItemKey {
    /// Generates a new random key
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ItemKey {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for ItemKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub key: ItemKey,
    pub label: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub important: bool,
}

impl Item {
    /// Creates a new pending, non-important item with a fresh key
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            key: ItemKey::new(),
            label: label.into(),
            done: false,
            important: false,
        }
    }

    pub fn toggle_done(&mut self) {
        self.done = !self.done;
    }

    pub fn toggle_important(&mut self) {
        self.important = !self.important;
    }

    /// Case-insensitive substring match against the label
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn label_contains_lowercase(&self, needle: &str) -> bool {
        needle.is_empty() || self.label.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = Item::new("Buy milk");
        assert_eq!(item.label, "Buy milk");
        assert!(!item.done);
        assert!(!item.important);
    }

    #[test]
    fn test_new_keys_are_distinct() {
        let a = Item::new("a");
        let b = Item::new("a");
        assert_ne!(a.key, b.key);
    }

    #[test]
    fn test_toggles_are_involutions() {
        let mut item = Item::new("Pay bills");

        item.toggle_done();
        assert!(item.done);
        item.toggle_done();
        assert!(!item.done);

        item.toggle_important();
        assert!(item.important);
        item.toggle_important();
        assert!(!item.important);
    }

    #[test]
    fn test_label_match_is_case_insensitive() {
        let item = Item::new("Buy MILK");
        assert!(item.label_contains_lowercase("milk"));
        assert!(item.label_contains_lowercase("buy m"));
        assert!(item.label_contains_lowercase(""));
        assert!(!item.label_contains_lowercase("bread"));
    }

    #[test]
    fn test_key_serializes_as_plain_string() {
        let key = ItemKey::from("abc-123");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"abc-123\"");
    }

    #[test]
    fn test_deserialize_without_flags() {
        // Seed entries are stored with only key and label
        let json = r#"{"key": "k1", "label": "Have fun"}"#;
        let item: Item = serde_json::from_str(json).unwrap();

        assert_eq!(item.key.as_str(), "k1");
        assert_eq!(item.label, "Have fun");
        assert!(!item.done);
        assert!(!item.important);
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{"key": "k1", "label": "x", "done": true, "color": "red"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(item.done);
    }
}
