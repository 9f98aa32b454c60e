//! Loading and failure placeholders for whole pages.

use dioxus::prelude::*;

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "status status-loading", "Loading..." }
    }
}

/// Rendered instead of a page whose initial fetch failed.
#[component]
pub fn ErrorState(message: String) -> Element {
    rsx! {
        div { class: "status status-error", role: "alert", "Error: {message}" }
    }
}
