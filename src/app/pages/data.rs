//! File upload page.

use dioxus::prelude::*;

use crate::app::components::{FileUploadButton, Layout};
use crate::app::navigation::use_navigation;
use crate::app::store_context::use_app_store;
use crate::nav::Destination;
use crate::store::UploadedFile;

#[component]
pub fn Data() -> Element {
    let store = use_app_store();
    let navigation = use_navigation();
    let count = store.files().len();

    rsx! {
        Layout { title: "Upload data".to_string(), active: Destination::Data,
            div { class: "card",
                p { "Choose the files to upload." }
                FileUploadButton {
                    label: "Choose files".to_string(),
                    on_files: move |files: Vec<UploadedFile>| store.add_files(files),
                }
                if count > 0 {
                    p { class: "text-muted", "{count} file(s) uploaded" }
                    button { class: "btn btn-link", onclick: move |_| navigation.go_to_files(), "View files" }
                }
            }
        }
    }
}
