//! Empty state components for displaying messages when there is nothing to show.

use leptos::prelude::*;

/// Message shown when the filtered item list is empty.
pub const NO_ITEMS_MESSAGE: &str = "No items found.";

/// Size variants for empty state displays.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum EmptyStateSize {
    /// Small size for inline/compact displays.
    Small,
    /// Medium size (default).
    #[default]
    Medium,
}

impl EmptyStateSize {
    const fn class(self) -> &'static str {
        match self {
            Self::Small => "empty-state-small",
            Self::Medium => "empty-state-medium",
        }
    }
}

/// Base empty state component.
#[component]
pub fn EmptyState(
    /// The message to display.
    message: &'static str,
    /// Size variant.
    #[prop(default = EmptyStateSize::Medium)]
    size: EmptyStateSize,
    /// Optional additional CSS class.
    #[prop(optional)]
    class: Option<&'static str>,
) -> impl IntoView {
    let full_class = format!("empty-state {} {}", size.class(), class.unwrap_or(""));

    view! {
        <div class=full_class>
            <p class="empty-state-message">{message}</p>
        </div>
    }
}

/// Empty state for when no item survives the filter.
#[component]
pub fn NoItemsEmptyState(
    /// Size variant.
    #[prop(default = EmptyStateSize::Medium)]
    size: EmptyStateSize,
) -> impl IntoView {
    view! {
        <EmptyState
            message=NO_ITEMS_MESSAGE
            size=size
            class="no-items-empty"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_items_message_is_literal() {
        assert_eq!(NO_ITEMS_MESSAGE, "No items found.");
    }

    #[test]
    fn test_empty_state_size_class() {
        assert_eq!(EmptyStateSize::Small.class(), "empty-state-small");
        assert_eq!(EmptyStateSize::Medium.class(), "empty-state-medium");
        assert_eq!(EmptyStateSize::default(), EmptyStateSize::Medium);
    }
}
