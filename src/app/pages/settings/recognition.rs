//! Face recognition thresholds.

use dioxus::prelude::*;

use super::SaveStatus;
use crate::app::components::{SettingsShell, ThresholdInput};
use crate::app::settings_context::use_settings;
use crate::nav::SettingsSection;

#[component]
pub fn SettingsRecognition() -> Element {
    rsx! {
        SettingsShell { section: SettingsSection::Recognition, RecognitionForm {} }
    }
}

#[component]
fn RecognitionForm() -> Element {
    let settings = use_settings();
    let mut draft = use_signal(|| settings.get().recognition);
    let mut result = use_signal(|| None::<Result<(), String>>);
    let current = draft();

    rsx! {
        section { class: "card",
            ThresholdInput {
                label: "Face recognition threshold",
                value: current.recognition,
                on_change: move |v| draft.write().recognition = v,
            }
            ThresholdInput {
                label: "Similarity threshold",
                value: current.similarity,
                on_change: move |v| draft.write().similarity = v,
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| {
                    let recognition = *draft.peek();
                    let saved = settings
                        .update(|s| s.recognition = recognition)
                        .map_err(|e| e.to_string());
                    result.set(Some(saved));
                },
                "Save"
            }
            SaveStatus { result: result() }
        }
    }
}
