//! Client-side item filtering.
//!
//! A name matches a term when it contains the term as a substring after both
//! are lowercased. The empty term matches every name.

use crate::item::Item;

/// Returns true if `name` contains `term`, ignoring case.
pub fn matches_term(name: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Filter items by name, preserving input order.
pub fn filter_items<'a>(items: &'a [Item], term: &str) -> Vec<&'a Item> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .collect()
}

/// Owned variant of [`filter_items`] for callers that hand the result to a view.
pub fn filter_items_owned(items: &[Item], term: &str) -> Vec<Item> {
    filter_items(items, term).into_iter().cloned().collect()
}
