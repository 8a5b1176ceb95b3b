use crate::domain::{
    filter::ItemCounts,
    item::{Item, ItemKey},
};
use serde::{Deserialize, Serialize};

/// Ordered collection of to-do items, newest first
///
/// Serializes as a bare JSON array, which is the persisted format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list of fresh items from labels, keeping their order
    pub fn from_labels<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            items: labels.into_iter().map(Item::new).collect(),
        }
    }

    /// Inserts an item at the front of the list
    pub fn prepend(&mut self, item: Item) {
        self.items.insert(0, item);
    }

    pub fn get(&self, key: &ItemKey) -> Option<&Item> {
        self.items.iter().find(|item| &item.key == key)
    }

    fn get_mut(&mut self, key: &ItemKey) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| &item.key == key)
    }

    /// Flips `done` on the matching item; returns false when no item matches
    pub fn toggle_done(&mut self, key: &ItemKey) -> bool {
        match self.get_mut(key) {
            Some(item) => {
                item.toggle_done();
                true
            }
            None => false,
        }
    }

    /// Flips `important` on the matching item; returns false when no item matches
    pub fn toggle_important(&mut self, key: &ItemKey) -> bool {
        match self.get_mut(key) {
            Some(item) => {
                item.toggle_important();
                true
            }
            None => false,
        }
    }

    /// Removes the matching item and returns it
    pub fn remove(&mut self, key: &ItemKey) -> Option<Item> {
        let pos = self.items.iter().position(|item| &item.key == key)?;
        Some(self.items.remove(pos))
    }

    /// Done/left tallies over the whole list
    pub fn counts(&self) -> ItemCounts {
        let done = self.items.iter().filter(|item| item.done).count();
        ItemCounts {
            done,
            left: self.items.len() - done,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Item>> for ItemList {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn labels(list: &ItemList) -> Vec<&str> {
        list.iter().map(|item| item.label.as_str()).collect()
    }

    #[test]
    fn test_from_labels_keeps_order() {
        let list = ItemList::from_labels(["a", "b", "c"]);
        assert_eq!(labels(&list), vec!["a", "b", "c"]);
        assert!(list.iter().all(|item| !item.done && !item.important));
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut list = ItemList::new();
        for label in ["first", "second", "third"] {
            list.prepend(Item::new(label));
        }

        assert_eq!(list.len(), 3);
        assert_eq!(labels(&list), vec!["third", "second", "first"]);
    }

    #[test]
    fn test_keys_stay_unique_across_adds_and_removes() {
        let mut list = ItemList::new();
        for i in 0..50 {
            list.prepend(Item::new(format!("item {}", i)));
        }
        let victims: Vec<ItemKey> = list.iter().step_by(3).map(|i| i.key.clone()).collect();
        for key in &victims {
            assert!(list.remove(key).is_some());
        }
        for i in 0..10 {
            list.prepend(Item::new(format!("late {}", i)));
        }

        let keys: HashSet<&ItemKey> = list.iter().map(|item| &item.key).collect();
        assert_eq!(keys.len(), list.len());
    }

    #[test]
    fn test_toggle_done_twice_restores_state() {
        let mut list = ItemList::from_labels(["a", "b"]);
        let key = list.as_slice()[1].key.clone();

        assert!(list.toggle_done(&key));
        assert!(list.get(&key).unwrap().done);
        assert!(list.toggle_done(&key));
        assert!(!list.get(&key).unwrap().done);
    }

    #[test]
    fn test_toggle_important_only_touches_target() {
        let mut list = ItemList::from_labels(["a", "b"]);
        let key = list.as_slice()[0].key.clone();

        assert!(list.toggle_important(&key));
        assert!(list.as_slice()[0].important);
        assert!(!list.as_slice()[1].important);
    }

    #[test]
    fn test_missing_key_is_noop() {
        let mut list = ItemList::from_labels(["a"]);
        let before = list.clone();
        let missing = ItemKey::from("missing");

        assert!(!list.toggle_done(&missing));
        assert!(!list.toggle_important(&missing));
        assert!(list.remove(&missing).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn test_removed_item_never_reappears() {
        let mut list = ItemList::from_labels(["a", "b", "c"]);
        let key = list.as_slice()[1].key.clone();

        let removed = list.remove(&key).unwrap();
        assert_eq!(removed.label, "b");
        assert!(!list.toggle_done(&key));
        assert!(!list.toggle_important(&key));
        assert!(list.remove(&key).is_none());
        assert!(list.get(&key).is_none());
        assert_eq!(labels(&list), vec!["a", "c"]);
    }

    #[test]
    fn test_counts_sum_to_len() {
        let mut list = ItemList::from_labels(["a", "b", "c", "d"]);
        let keys: Vec<ItemKey> = list.iter().map(|i| i.key.clone()).collect();
        list.toggle_done(&keys[0]);
        list.toggle_done(&keys[2]);

        let counts = list.counts();
        assert_eq!(counts.done, 2);
        assert_eq!(counts.left, 2);
        assert_eq!(counts.total(), list.len());
    }

    #[test]
    fn test_serializes_as_array() {
        let list = ItemList::from(vec![Item {
            key: ItemKey::from("k1"),
            label: "Buy milk".to_string(),
            done: true,
            important: false,
        }]);

        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(
            json,
            r#"[{"key":"k1","label":"Buy milk","done":true,"important":false}]"#
        );
    }

    #[test]
    fn test_json_round_trip_preserves_items() {
        let mut list = ItemList::from_labels(["Have fun", "Spread Empathy"]);
        let key = list.as_slice()[0].key.clone();
        list.toggle_important(&key);

        let json = serde_json::to_string(&list).unwrap();
        let loaded: ItemList = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, list);
    }
}
