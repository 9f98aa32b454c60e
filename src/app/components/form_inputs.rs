//! Reusable form input components.

use dioxus::prelude::*;

use crate::settings::parse_threshold;

/// A labeled threshold input. Only numbers in [0, 1] reach `on_change`;
/// anything else keeps the typed text and shows why it was refused.
#[component]
pub fn ThresholdInput(
    /// Input label, also names the field in validation messages
    label: &'static str,
    /// Current saved value
    value: f64,
    /// Called with each accepted value
    on_change: EventHandler<f64>,
) -> Element {
    let mut text = use_signal(|| value.to_string());
    let mut error = use_signal(|| None::<String>);

    rsx! {
        div { class: "form-row",
            label { class: "form-label", "{label}" }
            input {
                class: if error().is_some() { "input input-error" } else { "input" },
                r#type: "text",
                inputmode: "decimal",
                value: "{text}",
                oninput: move |e| {
                    let raw = e.value();
                    match parse_threshold(label, &raw) {
                        Ok(v) => {
                            error.set(None);
                            on_change.call(v);
                        }
                        Err(err) => error.set(Some(err.to_string())),
                    }
                    text.set(raw);
                }
            }
            if let Some(msg) = error() {
                p { class: "form-error", "{msg}" }
            }
        }
    }
}

/// A labeled text input bound to a caller-owned value.
#[component]
pub fn TextInput(
    label: &'static str,
    value: String,
    #[props(default = "text")] kind: &'static str,
    #[props(default)] placeholder: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-row",
            label { class: "form-label", "{label}" }
            input {
                class: "input",
                r#type: kind,
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

/// A labeled toggle switch with description.
#[component]
pub fn ToggleInput(
    /// Input label
    label: &'static str,
    /// Description text shown below label
    #[props(default)]
    description: &'static str,
    /// Current checked state
    checked: bool,
    /// Called when the toggle changes
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "form-row form-row-inline",
            div { class: "flex-1",
                label { class: "form-label", "{label}" }
                if !description.is_empty() {
                    p { class: "text-muted", "{description}" }
                }
            }
            input {
                class: "toggle",
                r#type: "checkbox",
                checked,
                onchange: move |e| on_change.call(e.checked()),
            }
        }
    }
}
