//! Icon button with a hover tooltip.

use dioxus::prelude::*;

#[component]
pub fn TooltipButton(
    /// Shown on hover and used as the accessible label
    tooltip: String,
    /// Short glyph or text rendered inside the button
    icon: String,
    #[props(default)] disabled: bool,
    #[props(default)] active: bool,
    on_click: EventHandler<()>,
) -> Element {
    rsx! {
        span { class: "tooltip", "data-tip": "{tooltip}",
            button {
                class: if active { "btn btn-icon btn-active" } else { "btn btn-icon" },
                title: "{tooltip}",
                "aria-label": "{tooltip}",
                disabled,
                onclick: move |_| on_click.call(()),
                "{icon}"
            }
        }
    }
}
