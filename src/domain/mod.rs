pub mod filter;
pub mod item;
pub mod item_list;

pub use filter::{visible_items, FilterState, ItemCounts, StatusFilter};
pub use item::{Item, ItemKey};
pub use item_list::ItemList;
