//! Editable camera fields, used for both the add and the edit form.

use dioxus::prelude::*;

use super::form_inputs::{TextInput, ToggleInput};
use crate::api::NewCamera;

/// Writes every keystroke straight into `draft`.
#[component]
pub fn CameraForm(draft: Signal<NewCamera>) -> Element {
    let mut draft = draft;
    let current = draft();

    rsx! {
        div { class: "camera-form",
            TextInput {
                label: "Name",
                placeholder: "Camera name".to_string(),
                value: current.name,
                on_input: move |v| draft.write().name = v,
            }
            TextInput {
                label: "Video URL",
                placeholder: "rtsp://".to_string(),
                value: current.url,
                on_input: move |v| draft.write().url = v,
            }
            TextInput {
                label: "Description",
                value: current.description,
                on_input: move |v| draft.write().description = v,
            }
            ToggleInput {
                label: "Active",
                checked: current.is_active,
                on_change: move |v| draft.write().is_active = v,
            }
        }
    }
}
