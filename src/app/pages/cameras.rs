//! Camera grid page.
//!
//! Shows one page of cameras in the chosen layout. Clicking a cell or picking
//! a name in the dropdown highlights that camera (and records it in the
//! store); double click or "Go to camera" opens the detail page.

use dioxus::prelude::*;

use crate::api::Camera;
use crate::app::components::{Dropdown, ErrorAlert, ErrorState, Layout, Loading, Modal, TooltipButton};
use crate::app::hooks::use_cameras;
use crate::app::navigation::use_navigation;
use crate::app::settings_context::use_settings;
use crate::collection::LoadStatus;
use crate::grid::{GridState, LayoutMode};
use crate::nav::Destination;

#[component]
pub fn Cameras() -> Element {
    let cameras = use_cameras();
    let navigation = use_navigation();
    let settings = use_settings();

    let mut grid = use_signal(|| GridState::new(settings.get().default_layout));
    let mut layout_chosen = use_signal(|| false);
    let mut show_status = use_signal(|| false);

    // Saved layout arrives after mount on a fresh load
    use_effect(move || {
        if settings.is_loaded() && !*layout_chosen.peek() {
            let total = cameras.collection.peek().len();
            grid.write().set_mode(settings.get().default_layout, total);
        }
    });

    // Keep the page in range when cameras disappear
    use_effect(move || {
        let total = cameras.collection.read().len();
        grid.write().clamp(total);
    });

    let collection = cameras.collection.read();
    match collection.status() {
        LoadStatus::Idle | LoadStatus::Loading => return rsx! {
            Layout { title: "Cameras".to_string(), active: Destination::Cameras, Loading {} }
        },
        LoadStatus::Failed(msg) => return rsx! {
            Layout { title: "Cameras".to_string(), active: Destination::Cameras,
                ErrorState { message: msg.clone() }
            }
        },
        LoadStatus::Loaded => {}
    }

    let total = collection.len();
    let state = grid();
    let selected = collection.selected();
    let names: Vec<String> = collection.items().iter().map(|c| c.name.clone()).collect();
    let cells: Vec<(usize, &'static str, Camera)> = state
        .cells(total)
        .into_iter()
        .filter_map(|cell| {
            collection
                .get(cell.index)
                .map(|camera| (cell.index, cell.role.class(), camera.clone()))
        })
        .collect();
    let statuses: Vec<Camera> = collection.items().to_vec();
    let mutation_error = collection.error().map(str::to_string);
    let selected_camera = collection.selected_item().cloned();
    drop(collection);

    rsx! {
        Layout { title: "Cameras".to_string(), active: Destination::Cameras,
            if let Some(msg) = mutation_error {
                ErrorAlert { message: msg, on_dismiss: move |_| cameras.dismiss_error() }
            }

            div { class: "toolbar",
                div { class: "layout-buttons",
                    for mode in LayoutMode::ALL {
                        TooltipButton {
                            tooltip: mode.label().to_string(),
                            icon: mode.page_size().to_string(),
                            active: mode == state.mode,
                            on_click: move |_| {
                                layout_chosen.set(true);
                                grid.write().set_mode(mode, total);
                            },
                        }
                    }
                }
                div { class: "pager",
                    button {
                        class: "btn btn-secondary btn-sm",
                        disabled: state.page == 0,
                        onclick: move |_| grid.write().prev(),
                        "Previous"
                    }
                    span { class: "page-label", "{state.page_label(total)}" }
                    button {
                        class: "btn btn-secondary btn-sm",
                        disabled: state.page + 1 >= state.page_count(total),
                        onclick: move |_| grid.write().next(total),
                        "Next"
                    }
                }
                TooltipButton {
                    tooltip: "Camera status".to_string(),
                    icon: "i".to_string(),
                    on_click: move |_| show_status.set(true),
                }
            }

            div { class: "cameras-page",
                div { class: state.mode.container_class(),
                    if cells.is_empty() {
                        p { class: "text-muted", "No cameras" }
                    }
                    for (index, class, camera) in cells {
                        div {
                            key: "{camera.id}",
                            class: if selected == Some(index) { format!("{class} selected") } else { class.to_string() },
                            onclick: move |_| cameras.select_index(index),
                            ondoubleclick: move |_| {
                                cameras.select_index(index);
                                navigation.go_to_camera(index);
                            },
                            CameraView { camera: camera.clone() }
                        }
                    }
                }

                aside { class: "side-panel",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| cameras.fetch_all(),
                        "Refresh cameras"
                    }
                    Dropdown {
                        label: "Camera".to_string(),
                        placeholder: "Select a camera".to_string(),
                        options: names,
                        selected,
                        on_select: move |name: String| cameras.select_by_name(&name),
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: selected.is_none(),
                        onclick: move |_| {
                            if let Some(index) = selected {
                                navigation.go_to_camera(index);
                            }
                        },
                        "Go to camera"
                    }
                    button {
                        class: "btn btn-secondary",
                        disabled: selected_camera.is_none(),
                        onclick: move |_| {
                            if let Some(ref camera) = selected_camera {
                                cameras.download_logs(camera.id.clone());
                            }
                        },
                        "Download logs"
                    }
                }
            }

            Modal {
                open: show_status(),
                title: "Camera status".to_string(),
                on_close: move |_| show_status.set(false),
                ul { class: "status-list",
                    for camera in statuses {
                        li { key: "{camera.id}",
                            span { "{camera.name}" }
                            if camera.is_active {
                                span { class: "badge badge-success", "Active" }
                            } else {
                                span { class: "badge badge-muted", "Disabled" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Video tile for one camera.
#[component]
pub fn CameraView(camera: Camera) -> Element {
    rsx! {
        div { class: "camera-view",
            if camera.url.is_empty() {
                div { class: "camera-placeholder", "No video source" }
            } else {
                video {
                    src: "{camera.url}",
                    autoplay: true,
                    muted: true,
                }
            }
            span { class: "camera-name", "{camera.name}" }
        }
    }
}
