//! Search bar component that submits the term to the backend.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use marketplace_core::{StorefrontConfig, submit_search_to};

use crate::api::HttpTransport;

/// Search form that sends `GET /search?name=...` on submit.
///
/// The response is not shown anywhere. Failures are logged to the console.
/// Blank terms are not sent.
#[component]
pub fn SearchBar(
    /// Placeholder for the search input.
    #[prop(into, default = "Search for items".to_string())]
    placeholder: String,
) -> impl IntoView {
    let config = use_context::<StorefrontConfig>().unwrap_or_default();
    let term = RwSignal::new(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let value = term.get_untracked();
        let config = config.clone();
        spawn_local(async move {
            let transport = HttpTransport::new(&config);
            submit_search_to(&transport, &config.search_path, &value).await;
        });
    };

    view! {
        <div class="search-bar">
            <form class="search-bar-form" on:submit=handle_submit>
                <input
                    class="search-bar-input"
                    type="search"
                    placeholder=placeholder
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
                <button class="btn btn-outline" type="submit">
                    "Search"
                </button>
            </form>
        </div>
    }
}
