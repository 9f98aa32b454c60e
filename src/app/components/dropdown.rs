//! Select box over a list of names.

use dioxus::prelude::*;

/// Dropdown of `options`; `selected` is the highlighted entry's index.
/// Picking the placeholder entry reports nothing.
#[component]
pub fn Dropdown(
    label: String,
    options: Vec<String>,
    selected: Option<usize>,
    #[props(default = "Select...".to_string())] placeholder: String,
    on_select: EventHandler<String>,
) -> Element {
    let current = selected
        .and_then(|i| options.get(i).cloned())
        .unwrap_or_default();

    rsx! {
        div { class: "dropdown",
            label { class: "form-label", "{label}" }
            select {
                class: "select",
                value: "{current}",
                onchange: move |e| {
                    let name = e.value();
                    if !name.is_empty() {
                        on_select.call(name);
                    }
                },
                option { value: "", disabled: true, selected: selected.is_none(), "{placeholder}" }
                for (i, name) in options.iter().enumerate() {
                    option {
                        key: "{i}",
                        value: "{name}",
                        selected: selected == Some(i),
                        "{name}"
                    }
                }
            }
        }
    }
}
