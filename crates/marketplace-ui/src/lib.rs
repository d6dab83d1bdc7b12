//! Marketplace UI - Leptos-based storefront.
//!
//! This crate provides the storefront components: a header with logout, an
//! item list filtered as you type, and a search bar that queries the backend.

pub mod api;
pub mod app;
pub mod browser;
pub mod components;
pub mod logging;

pub use app::App;
pub use components::{Header, ItemList, ItemListMode, SearchBar};
