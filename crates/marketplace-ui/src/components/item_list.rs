//! Item list component with a local search filter.

use leptos::ev::Event;
use leptos::prelude::*;
use marketplace_core::{Item, filter_items_owned, history_path, term_from_query};

use crate::browser::{location_search, push_history};
use crate::components::empty_state::{EmptyStateSize, NoItemsEmptyState};

/// How the item list treats its search term.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ItemListMode {
    /// The term lives only in the component.
    #[default]
    Local,
    /// Every change is also pushed to the address bar as `/search?name=...`,
    /// and the initial term is read back from the current location.
    UrlReflecting,
}

impl ItemListMode {
    const fn reflects_url(self) -> bool {
        matches!(self, Self::UrlReflecting)
    }

    /// History entry to push when the term changes, if any.
    fn history_entry(self, term: &str) -> Option<String> {
        self.reflects_url().then(|| history_path(term))
    }
}

/// What the list body shows for a term.
#[derive(Clone, Debug, PartialEq, Eq)]
enum ListBody {
    /// Nothing matched; only the empty-state message is shown.
    NoItems,
    /// Matching items, in input order.
    Rows(Vec<Item>),
}

impl ListBody {
    fn for_term(items: &[Item], term: &str) -> Self {
        let rows = filter_items_owned(items, term);
        if rows.is_empty() {
            Self::NoItems
        } else {
            Self::Rows(rows)
        }
    }

    const fn is_empty(&self) -> bool {
        matches!(self, Self::NoItems)
    }

    fn rows(&self) -> &[Item] {
        match self {
            Self::NoItems => &[],
            Self::Rows(rows) => rows,
        }
    }
}

/// Format a price with thousands separators.
fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if price < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Single item row.
#[component]
fn ItemRow(
    /// The item to display.
    item: Item,
) -> impl IntoView {
    view! {
        <div class="item-row" data-item-id=item.id.to_string()>
            <div class="item-name">{item.name}</div>
            <div class="item-category">{item.category_name}</div>
            <div class="item-price">{format_price(item.price)}</div>
        </div>
    }
}

/// Item list with a search input that filters by name as you type.
///
/// The filter is a case-insensitive substring match and keeps the order of
/// `items`. When nothing matches, the list shows "No items found.".
#[component]
pub fn ItemList(
    /// Items to display, supplied by the parent.
    #[prop(into)]
    items: Signal<Vec<Item>>,
    /// Whether the search term is reflected in the address bar.
    #[prop(default = ItemListMode::Local)]
    mode: ItemListMode,
    /// Placeholder for the search input.
    #[prop(into, default = "Search Items".to_string())]
    placeholder: String,
) -> impl IntoView {
    let initial_term = if mode.reflects_url() {
        term_from_query(&location_search()).unwrap_or_default()
    } else {
        String::new()
    };
    let term = RwSignal::new(initial_term);

    let body = Memo::new(move |_| {
        let term = term.get();
        items.with(|items| ListBody::for_term(items, &term))
    });

    let handle_input = move |ev: Event| {
        let value = event_target_value(&ev);
        if let Some(path) = mode.history_entry(&value) {
            push_history(&path);
        }
        term.set(value);
    };

    view! {
        <div class="item-list">
            <form class="item-list-search" on:submit=|ev| ev.prevent_default()>
                <input
                    class="item-list-search-input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || term.get()
                    on:input=handle_input
                />
            </form>
            {move || {
                if body.with(ListBody::is_empty) {
                    view! { <NoItemsEmptyState size=EmptyStateSize::Small /> }.into_any()
                } else {
                    view! {
                        <div class="item-list-rows">
                            <For
                                each=move || body.with(|b| b.rows().to_vec())
                                key=|item| item.id
                                children=move |item| view! { <ItemRow item=item /> }
                            />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
