//! Single camera page.

use dioxus::prelude::*;

use crate::app::components::{ErrorAlert, ErrorState, Layout, Loading};
use crate::app::hooks::use_cameras;
use crate::app::navigation::use_navigation;
use crate::app::pages::cameras::CameraView;
use crate::collection::LoadStatus;
use crate::nav::Destination;

/// Camera `id` is an index into the camera list, as chosen on the grid.
#[component]
pub fn CameraDetail(id: usize) -> Element {
    let cameras = use_cameras();
    let navigation = use_navigation();
    let active = Destination::Camera(id);

    let collection = cameras.collection.read();
    match collection.status() {
        LoadStatus::Idle | LoadStatus::Loading => return rsx! {
            Layout { title: "Camera".to_string(), active, Loading {} }
        },
        LoadStatus::Failed(msg) => return rsx! {
            Layout { title: "Camera".to_string(), active, ErrorState { message: msg.clone() } }
        },
        LoadStatus::Loaded => {}
    }

    let Some(camera) = collection.get(id).cloned() else {
        return rsx! {
            Layout { title: "Camera".to_string(), active,
                h2 { "Camera not found" }
                button { class: "btn btn-secondary", onclick: move |_| navigation.go_to_cameras(), "Back" }
            }
        };
    };
    let mutation_error = collection.error().map(str::to_string);
    drop(collection);

    let details = cameras.details.read().clone().filter(|d| d.id == camera.id);
    let camera_id = camera.id.clone();
    let logs_id = camera.id.clone();

    rsx! {
        Layout { title: camera.name.clone(), active,
            if let Some(msg) = mutation_error {
                ErrorAlert { message: msg, on_dismiss: move |_| cameras.dismiss_error() }
            }

            div { class: "camera-detail",
                CameraView { camera: camera.clone() }

                aside { class: "side-panel",
                    button { class: "btn btn-secondary", onclick: move |_| navigation.go_to_cameras(), "Back" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| cameras.fetch_details(camera_id.clone()),
                        "Camera information"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| cameras.download_logs(logs_id.clone()),
                        "Download logs"
                    }

                    if let Some(info) = details {
                        div { class: "card camera-info",
                            h3 { "Camera information" }
                            dl { class: "info-list",
                                dt { "ID" }
                                dd { "{info.id}" }
                                dt { "Name" }
                                dd { "{info.name}" }
                                dt { "Description" }
                                dd { {info.description.clone().unwrap_or_default()} }
                                dt { "URL" }
                                dd { "{info.url}" }
                                dt { "Status" }
                                dd { if info.is_active { "Active" } else { "Disabled" } }
                            }
                        }
                    }
                }
            }
        }
    }
}
