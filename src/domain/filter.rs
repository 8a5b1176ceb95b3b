use crate::{domain::item::Item, error::TodoError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Restricts the visible items by completion state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Done,
}

impl StatusFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.done,
            Self::Done => item.done,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            // Unset filter behaves like "all"
            "" | "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "done" => Ok(Self::Done),
            _ => Err(TodoError::InvalidStatusFilter(s.to_string())),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Active => write!(f, "active"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// Transient view state: search text plus status filter
///
/// Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub status: StatusFilter,
    search: String,
    search_lower: String,
}

impl FilterState {
    pub fn new(status: StatusFilter, search: impl Into<String>) -> Self {
        let mut state = Self {
            status,
            ..Self::default()
        };
        state.set_search(search);
        state
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.search_lower = self.search.to_lowercase();
    }

    pub fn is_searching(&self) -> bool {
        !self.search.is_empty()
    }

    /// Whether an item passes both the search and the status filter
    pub fn matches(&self, item: &Item) -> bool {
        item.label_contains_lowercase(&self.search_lower) && self.status.matches(item)
    }
}

/// Completion tallies, always taken over the full list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemCounts {
    pub done: usize,
    pub left: usize,
}

impl ItemCounts {
    pub fn total(&self) -> usize {
        self.done + self.left
    }
}

/// Derives the visible subset of `items`
///
/// A non-empty search narrows the list to labels containing it
/// (case-insensitively), then the status filter applies to what remains. With
/// an empty search the status filter applies to the whole list. Relative order
/// is preserved.
pub fn visible_items<'a, I>(items: I, state: &FilterState) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .filter(|item| state.matches(item))
        .collect()
}
