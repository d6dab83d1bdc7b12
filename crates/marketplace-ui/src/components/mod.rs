//! UI components for the storefront.

pub mod empty_state;
pub mod header;
pub mod item_list;
pub mod search_bar;

pub use empty_state::{EmptyState, EmptyStateSize, NO_ITEMS_MESSAGE, NoItemsEmptyState};
pub use header::Header;
pub use item_list::{ItemList, ItemListMode};
pub use search_bar::SearchBar;
