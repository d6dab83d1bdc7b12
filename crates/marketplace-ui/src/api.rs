//! HTTP bindings for WASM.
//!
//! This module talks to the marketplace backend through the browser's fetch
//! API via `gloo-net`.

use gloo_net::http::Request;
use marketplace_core::{Error, ITEMS_PATH, Item, Result, SearchTransport, StorefrontConfig};
use tracing::debug;

/// Fetch-backed transport for the backend endpoints.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: StorefrontConfig,
}

impl HttpTransport {
    /// Create a transport against the configured API base URL.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl SearchTransport for HttpTransport {
    async fn get(&self, path: &str) -> Result<String> {
        let url = self.config.url_for(path);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| Error::request(path, e.to_string()))?;

        if !response.ok() {
            return Err(Error::Status {
                path: path.to_string(),
                status: response.status(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| Error::request(path, e.to_string()))
    }
}

/// Load the on-sale item list.
///
/// The backend answers 404 when nothing is on sale, which is an empty list
/// from the storefront's point of view.
pub async fn fetch_items(config: &StorefrontConfig) -> Result<Vec<Item>> {
    let transport = HttpTransport::new(config);
    match transport.get(ITEMS_PATH).await {
        Ok(body) => {
            let items: Vec<Item> = serde_json::from_str(&body)?;
            debug!(count = items.len(), "Fetched items");
            Ok(items)
        }
        Err(Error::Status { status: 404, .. }) => {
            debug!("No items on sale");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}
