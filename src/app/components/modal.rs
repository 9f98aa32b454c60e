//! Minimal modal shell.

use dioxus::prelude::*;

/// Overlay dialog. Rendered only while `open`; clicking the backdrop or the
/// close button calls `on_close`.
#[component]
pub fn Modal(
    open: bool,
    title: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { "{title}" }
                    button {
                        class: "btn btn-ghost btn-sm",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}
