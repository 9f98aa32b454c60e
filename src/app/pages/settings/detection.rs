//! Detection thresholds.

use dioxus::prelude::*;

use super::SaveStatus;
use crate::app::components::{SettingsShell, ThresholdInput};
use crate::app::settings_context::use_settings;
use crate::nav::SettingsSection;
use crate::settings::DetectionThresholds;

#[component]
pub fn SettingsDetection() -> Element {
    rsx! {
        SettingsShell { section: SettingsSection::Detection, DetectionForm {} }
    }
}

#[component]
fn DetectionForm() -> Element {
    let settings = use_settings();
    let mut draft = use_signal(|| settings.get().detection);
    let mut result = use_signal(|| None::<Result<(), String>>);
    let current: DetectionThresholds = draft();

    rsx! {
        section { class: "card",
            ThresholdInput {
                label: "Face detection threshold",
                value: current.face,
                on_change: move |v| draft.write().face = v,
            }
            ThresholdInput {
                label: "Silhouette detection threshold",
                value: current.silhouette,
                on_change: move |v| draft.write().silhouette = v,
            }
            ThresholdInput {
                label: "IoU threshold",
                value: current.iou,
                on_change: move |v| draft.write().iou = v,
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| {
                    let detection = *draft.peek();
                    let saved = settings
                        .update(|s| s.detection = detection)
                        .map_err(|e| e.to_string());
                    result.set(Some(saved));
                },
                "Save"
            }
            SaveStatus { result: result() }
        }
    }
}
