//! Marketplace Core Library
//!
//! This crate provides the target-independent logic behind the storefront:
//! - The [`Item`] listing type shared by the UI and the server
//! - Case-insensitive item filtering by name
//! - Search query encoding for requests and browser history entries
//! - Session cookie clearing on logout
//! - Search bar submission over a pluggable [`SearchTransport`]
//! - Storefront configuration
//!
//! Everything here builds for both native targets and `wasm32`.

pub mod config;
pub mod error;
pub mod filter;
pub mod item;
pub mod query;
pub mod search;
pub mod session;

pub use config::StorefrontConfig;
pub use error::{Error, Result};
pub use filter::{filter_items, filter_items_owned, matches_term};
pub use item::{Item, find_duplicate_id};
pub use query::{
    ITEMS_PATH, NAME_PARAM, SEARCH_PATH, SearchQuery, encode_component, history_path, term_from_query,
};
pub use search::{SearchTransport, SubmitOutcome, submit_search, submit_search_to};
pub use session::{
    CookieStore, SESSION_COOKIES, TOKEN_COOKIE, USER_ID_COOKIE, clear_session, removal_cookie,
};
