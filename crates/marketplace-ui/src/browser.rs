//! Browser side effects: cookies, history and location.
//!
//! None of these report failure to the caller. A missing window or a
//! rejected DOM call is logged and ignored.

use marketplace_core::{CookieStore, removal_cookie};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlDocument;

/// Cookie store backed by `document.cookie`.
#[derive(Debug, Clone)]
pub struct DocumentCookies {
    path: String,
}

impl DocumentCookies {
    /// Create a store that removes cookies set on `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl CookieStore for DocumentCookies {
    fn remove(&mut self, name: &str) {
        let Some(document) = html_document() else {
            leptos::logging::warn!("No document available, cannot remove cookie {}", name);
            return;
        };

        if let Err(e) = document.set_cookie(&removal_cookie(name, &self.path)) {
            leptos::logging::warn!("Failed to remove cookie {}: {:?}", name, e);
        }
    }
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

/// Push a new history entry without reloading the page.
pub fn push_history(path: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        leptos::logging::warn!("History API unavailable, not pushing {}", path);
        return;
    };

    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
        leptos::logging::warn!("Failed to push history entry {}: {:?}", path, e);
    }
}

/// The current location's query string, including the leading `?`.
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}
