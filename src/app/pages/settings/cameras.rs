//! Camera management: add, edit and delete cameras.

use dioxus::prelude::*;

use crate::api::NewCamera;
use crate::app::components::{CameraForm, Dropdown, ErrorAlert, ErrorState, Loading, SettingsShell};
use crate::app::hooks::use_cameras;
use crate::collection::LoadStatus;
use crate::nav::SettingsSection;

#[component]
pub fn SettingsMain() -> Element {
    rsx! {
        SettingsShell { section: SettingsSection::Main, CameraManager {} }
    }
}

#[component]
fn CameraManager() -> Element {
    let cameras = use_cameras();
    let mut edit = use_signal(NewCamera::default);

    let collection = cameras.collection.read();
    match collection.status() {
        LoadStatus::Idle | LoadStatus::Loading => return rsx! { Loading {} },
        LoadStatus::Failed(msg) => return rsx! { ErrorState { message: msg.clone() } },
        LoadStatus::Loaded => {}
    }
    let names: Vec<String> = collection.items().iter().map(|c| c.name.clone()).collect();
    let selected = collection.selected();
    let selected_id = collection.selected_item().map(|c| c.id.clone());
    let mutation_error = collection.error().map(str::to_string);
    drop(collection);

    let update_id = selected_id.clone();

    rsx! {
        if let Some(msg) = mutation_error {
            ErrorAlert { message: msg, on_dismiss: move |_| cameras.dismiss_error() }
        }

        section { class: "card",
            h3 { "Add camera" }
            CameraForm { draft: cameras.draft }
            button { class: "btn btn-primary", onclick: move |_| cameras.add(), "Add camera" }
        }

        section { class: "card",
            h3 { "Edit camera" }
            Dropdown {
                label: "Camera".to_string(),
                placeholder: "Select a camera".to_string(),
                options: names,
                selected,
                on_select: move |name: String| {
                    cameras.select_by_name(&name);
                    if let Some(camera) = cameras.collection.peek().selected_item() {
                        edit.set(NewCamera::from(camera));
                    }
                },
            }
            if selected_id.is_some() {
                CameraForm { draft: edit }
                div { class: "actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            if let Some(ref id) = update_id {
                                cameras.update(id.clone(), edit.peek().clone());
                            }
                        },
                        "Update camera"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| {
                            if let Some(ref id) = selected_id {
                                cameras.remove(id.clone());
                                edit.set(NewCamera::default());
                            }
                        },
                        "Delete camera"
                    }
                }
            }
        }
    }
}
