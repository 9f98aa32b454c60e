//! Application store: cross-page selection and the uploaded file list.
//!
//! State changes only through [`AppState::reduce`], which returns a new value;
//! the UI layer swaps the whole value into its signal.

use std::sync::Arc;

/// A file picked in the browser or downloaded from the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub data: Arc<[u8]>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content_type: Option<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type,
            data: data.into(),
        }
    }

    /// Size in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_pdf(&self) -> bool {
        self.content_type.as_deref() == Some("application/pdf")
            || self.name.to_ascii_lowercase().ends_with(".pdf")
    }
}

impl From<crate::api::DownloadedFile> for UploadedFile {
    fn from(file: crate::api::DownloadedFile) -> Self {
        Self::new(file.name, file.content_type, file.data)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub selected_camera_index: Option<usize>,
    pub files: Vec<UploadedFile>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Replace the selection.
    SetSelectedCameraIndex(Option<usize>),
    /// Append, preserving order.
    AddFiles(Vec<UploadedFile>),
}

impl AppState {
    pub fn reduce(&self, action: Action) -> AppState {
        match action {
            Action::SetSelectedCameraIndex(index) => AppState {
                selected_camera_index: index,
                files: self.files.clone(),
            },
            Action::AddFiles(files) => {
                let mut all = self.files.clone();
                all.extend(files);
                AppState {
                    selected_camera_index: self.selected_camera_index,
                    files: all,
                }
            }
        }
    }

    /// The file the report page shows.
    pub fn current_report(&self) -> Option<&UploadedFile> {
        self.files.first()
    }
}
