//! Uploaded file list.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::store_context::use_app_store;
use crate::nav::Destination;
use crate::report::format_size;

#[component]
pub fn Files() -> Element {
    let files = use_app_store().files();

    rsx! {
        Layout { title: "Files".to_string(), active: Destination::Files,
            div { class: "card",
                if files.is_empty() {
                    p { class: "text-muted", "No files" }
                } else {
                    ul { class: "file-list",
                        for (i, file) in files.iter().enumerate() {
                            li { key: "{i}",
                                span { "{file.name}" }
                                small { class: "text-muted", " {format_size(file.size())}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
