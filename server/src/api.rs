//! HTTP handlers for the storefront.

use std::sync::Arc;

use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
};
use marketplace_core::Item;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;

/// Shared state handed to every handler.
#[derive(Debug, Default)]
pub struct AppState {
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

type ApiError = (StatusCode, Json<serde_json::Value>);

fn not_found(message: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": message })),
    )
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Substring to look for. Missing means match everything.
    #[serde(default)]
    pub name: Option<String>,
}

/// `GET /search?name=<term>`
pub async fn search_items(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Item>> {
    let term = params.name.unwrap_or_default();
    let items = state.catalog.search(&term);
    debug!(term = %term, matches = items.len(), "Search");
    Json(items)
}

/// `GET /items`, answering 404 when nothing is on sale.
pub async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    if state.catalog.is_empty() {
        return Err(not_found("Item not found"));
    }
    Ok(Json(state.catalog.all().to_vec()))
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub items: usize,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        items: state.catalog.len(),
    })
}
