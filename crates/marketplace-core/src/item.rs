//! Marketplace item listing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A single listing shown in the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Item {
    /// Unique identifier, also used as the render key.
    pub id: i64,
    /// Display name. Filtering and searching match against this field.
    pub name: String,
    /// Listed price.
    pub price: i64,
    /// Name of the category the item belongs to.
    pub category_name: String,
}

impl Item {
    /// Create a new item.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: i64,
        category_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category_name: category_name.into(),
        }
    }
}

/// Returns the first identifier that appears more than once, if any.
pub fn find_duplicate_id(items: &[Item]) -> Option<i64> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().map(|item| item.id).find(|id| !seen.insert(*id))
}
