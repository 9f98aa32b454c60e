//! Stream processor deployments.

use dioxus::prelude::*;

use crate::app::components::{Dropdown, ErrorAlert, ErrorState, Loading, SettingsShell, TextInput};
use crate::app::hooks::use_streams;
use crate::collection::LoadStatus;
use crate::nav::SettingsSection;

#[component]
pub fn SettingsStreams() -> Element {
    rsx! {
        SettingsShell { section: SettingsSection::Streams, StreamManager {} }
    }
}

#[component]
fn StreamManager() -> Element {
    let streams = use_streams();
    let mut draft = streams.draft;

    let collection = streams.collection.read();
    match collection.status() {
        LoadStatus::Idle | LoadStatus::Loading => return rsx! { Loading {} },
        LoadStatus::Failed(msg) => return rsx! { ErrorState { message: msg.clone() } },
        LoadStatus::Loaded => {}
    }
    let names: Vec<String> = collection.items().iter().map(|s| s.name.clone()).collect();
    let selected = collection.selected();
    let selected_stream = collection.selected_item().cloned();
    let mutation_error = collection.error().map(str::to_string);
    drop(collection);

    let current = draft();
    let camera_id = current.camera_id.map(|id| id.to_string()).unwrap_or_default();
    let status = (streams.status)();
    let remove_name = selected_stream.as_ref().map(|s| s.name.clone());
    let status_name = remove_name.clone();

    rsx! {
        if let Some(msg) = mutation_error {
            ErrorAlert { message: msg, on_dismiss: move |_| streams.dismiss_error() }
        }

        section { class: "card",
            h3 { "Deploy stream" }
            TextInput {
                label: "Stream name",
                value: current.name,
                on_input: move |v| draft.write().name = v,
            }
            TextInput {
                label: "Camera ID",
                kind: "number",
                value: camera_id,
                on_input: move |v: String| draft.write().camera_id = v.trim().parse().ok(),
            }
            button { class: "btn btn-primary", onclick: move |_| streams.add(), "Deploy stream" }
        }

        section { class: "card",
            h3 { "Existing streams" }
            Dropdown {
                label: "Stream".to_string(),
                placeholder: "Select a stream".to_string(),
                options: names,
                selected,
                on_select: move |name: String| {
                    streams.select_by_name(&name);
                },
            }
            if let Some(stream) = selected_stream {
                p { class: "text-muted",
                    "Camera: "
                    {stream.camera_id.map(|id| id.to_string()).unwrap_or_else(|| "none".to_string())}
                }
                div { class: "actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            if let Some(ref name) = status_name {
                                streams.fetch_status(name.clone());
                            }
                        },
                        "Check status"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| {
                            if let Some(ref name) = remove_name {
                                streams.remove(name.clone());
                            }
                        },
                        "Delete stream"
                    }
                }
            }
            if let Some(s) = status {
                div { class: "card stream-status",
                    strong { "{s.name}: {s.status}" }
                    if let Some(details) = s.details {
                        p { class: "text-muted", "{details}" }
                    }
                }
            }
        }
    }
}
