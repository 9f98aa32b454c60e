//! Report viewer. The first stored file is the current report.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::download::save_file;
use crate::app::store_context::use_app_store;
use crate::nav::Destination;
use crate::report::{format_size, preview, Preview};

#[component]
pub fn Report() -> Element {
    let store = use_app_store();
    let files = store.files();
    let current = store
        .current_report()
        .map(|r| (r.name.clone(), format_size(r.size()), preview(&r), r));

    rsx! {
        Layout { title: "Report".to_string(), active: Destination::Report,
            div { class: "report-page",
                div { class: "card",
                    h3 { "Files" }
                    if files.is_empty() {
                        p { class: "text-muted", "No files" }
                    }
                    ul { class: "file-list",
                        for (i, file) in files.iter().enumerate() {
                            li { key: "{i}", "{file.name}" }
                        }
                    }
                }

                if let Some((name, size, shown, report)) = current {
                    div { class: "card report-viewer",
                        div { class: "report-header",
                            strong { "{name}" }
                            small { class: "text-muted", " {size}" }
                            button {
                                class: "btn btn-primary btn-sm",
                                onclick: move |_| save_file(&report),
                                "Download"
                            }
                        }
                        match shown {
                            Preview::Text(text) => rsx! { pre { class: "report-text", "{text}" } },
                            Preview::PdfUnavailable => rsx! {
                                p { class: "text-muted", "PDF preview is not available. Download the file to view it." }
                            },
                            Preview::Binary => rsx! {
                                p { class: "text-muted", "This file cannot be previewed." }
                            },
                        }
                    }
                } else {
                    div { class: "card report-viewer",
                        p { class: "text-muted", "No report selected" }
                    }
                }
            }
        }
    }
}
