//! File picker button.

use dioxus::prelude::*;

use crate::store::UploadedFile;

/// Opens the browser file picker and reports the chosen files, in picker
/// order, once all of them are read.
#[component]
pub fn FileUploadButton(
    label: String,
    #[props(default)] accept: String,
    #[props(default = true)] multiple: bool,
    on_files: EventHandler<Vec<UploadedFile>>,
) -> Element {
    rsx! {
        label { class: "btn btn-secondary file-upload",
            "{label}"
            input {
                class: "hidden",
                r#type: "file",
                accept: "{accept}",
                multiple,
                onchange: move |evt| async move {
                    let mut files = Vec::new();
                    for file in evt.files() {
                        let name = file.name();
                        match file.read_bytes().await {
                            Ok(bytes) => {
                                files.push(UploadedFile::new(name, file.content_type(), bytes.to_vec()));
                            }
                            Err(e) => tracing::warn!("Failed to read {}: {}", name, e),
                        }
                    }
                    if !files.is_empty() {
                        on_files.call(files);
                    }
                },
            }
        }
    }
}
