//! Inline alert for a failed create/update/delete.

use dioxus::prelude::*;

/// Shown above a list whose last mutation failed. The list itself still
/// shows the last good data.
#[component]
pub fn ErrorAlert(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "alert alert-error", role: "alert",
            span { "Error: {message}" }
            button {
                class: "btn btn-ghost btn-sm",
                "aria-label": "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
