//! Header component.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use marketplace_core::{StorefrontConfig, clear_session};

use crate::browser::DocumentCookies;

/// Storefront header with branding and a logout control.
///
/// Logging out removes the session cookies and nothing else. Redirecting
/// afterwards is up to the parent, through `on_logout`.
#[component]
pub fn Header(
    /// Storefront title.
    #[prop(into, default = "Simple Marketplace".to_string())]
    title: String,
    /// Subtitle shown next to the title.
    #[prop(into, optional)]
    subtitle: Option<String>,
    /// Called after the session cookies have been removed.
    #[prop(optional)]
    on_logout: Option<Callback<()>>,
) -> impl IntoView {
    let cookie_path = use_context::<StorefrontConfig>()
        .unwrap_or_default()
        .cookie_path;

    let handle_logout = move |ev: MouseEvent| {
        ev.prevent_default();
        clear_session(&mut DocumentCookies::new(cookie_path.clone()));
        if let Some(callback) = on_logout {
            callback.run(());
        }
    };

    view! {
        <header class="app-header">
            <div class="header-title">
                <span class="header-title-text">{title}</span>
                {subtitle.map(|s| view! {
                    <span class="header-subtitle">{s}</span>
                })}
            </div>
            <div class="logout-button-container">
                <button class="logout-button" on:click=handle_logout>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
