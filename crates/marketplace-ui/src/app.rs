//! Main application component.

use leptos::prelude::*;
use leptos::task::spawn_local;
use marketplace_core::{Item, StorefrontConfig};

use crate::api::fetch_items;
use crate::components::{Header, ItemList, ItemListMode, SearchBar};

/// Main application component.
#[component]
pub fn App(
    /// Storefront settings. Defaults to a same-origin backend.
    #[prop(optional)]
    config: Option<StorefrontConfig>,
    /// How the item list treats its search term.
    #[prop(default = ItemListMode::Local)]
    list_mode: ItemListMode,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    provide_context(config.clone());

    let items = RwSignal::new(Vec::<Item>::new());

    spawn_local(async move {
        match fetch_items(&config).await {
            Ok(loaded) => {
                leptos::logging::log!("Loaded {} items", loaded.len());
                items.set(loaded);
            }
            Err(e) => {
                leptos::logging::error!("Failed to load items: {}", e);
            }
        }
    });

    view! {
        <Header />
        <main class="storefront">
            <SearchBar />
            <ItemList items=items mode=list_mode />
        </main>
    }
}
