//! In-memory item catalog loaded from a JSON file.

use std::fs;
use std::path::Path;

use marketplace_core::{Error, Item, Result, filter_items_owned, find_duplicate_id};
use tracing::{info, warn};

/// Items on sale, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog from items, rejecting duplicate ids.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        if let Some(id) = find_duplicate_id(&items) {
            return Err(Error::Configuration(format!("Duplicate item id {id}")));
        }
        Ok(Self { items })
    }

    /// Load a catalog from a JSON array of items.
    ///
    /// A missing file gives an empty catalog so the server can still start.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!("Catalog {} not found, starting with no items", path.display());
            return Ok(Self::default());
        }

        let catalog_error = |message: String| Error::Catalog {
            path: path.to_path_buf(),
            message,
        };

        let content = fs::read_to_string(path)?;
        let items: Vec<Item> =
            serde_json::from_str(&content).map_err(|e| catalog_error(e.to_string()))?;
        let catalog = Self::new(items).map_err(|e| catalog_error(e.to_string()))?;

        info!(count = catalog.len(), "Loaded catalog from {}", path.display());
        Ok(catalog)
    }

    /// All items, in catalog order.
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    /// Items whose name contains `name`, ignoring case.
    pub fn search(&self, name: &str) -> Vec<Item> {
        filter_items_owned(&self.items, name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
