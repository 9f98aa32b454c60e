//! Additional settings: the layout the camera grid opens with.

use dioxus::prelude::*;

use super::SaveStatus;
use crate::app::components::SettingsShell;
use crate::app::settings_context::use_settings;
use crate::grid::LayoutMode;
use crate::nav::SettingsSection;

#[component]
pub fn SettingsAdditional() -> Element {
    rsx! {
        SettingsShell { section: SettingsSection::Additional, AdditionalForm {} }
    }
}

#[component]
fn AdditionalForm() -> Element {
    let settings = use_settings();
    let mut layout = use_signal(|| settings.get().default_layout);
    let mut result = use_signal(|| None::<Result<(), String>>);

    rsx! {
        section { class: "card",
            div { class: "form-row",
                label { class: "form-label", "Default camera layout" }
                select {
                    class: "select",
                    value: layout().as_str(),
                    onchange: move |e| {
                        if let Some(mode) = LayoutMode::parse(&e.value()) {
                            layout.set(mode);
                        }
                    },
                    for mode in LayoutMode::ALL {
                        option {
                            value: mode.as_str(),
                            selected: mode == layout(),
                            "{mode.label()}"
                        }
                    }
                }
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| {
                    let mode = layout();
                    let saved = settings
                        .update(|s| s.default_layout = mode)
                        .map_err(|e| e.to_string());
                    result.set(Some(saved));
                },
                "Save"
            }
            SaveStatus { result: result() }
        }
    }
}
