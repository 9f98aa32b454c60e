//! Application store context.
//!
//! Holds the single [`AppState`] value shared by every page. Pages never
//! write the signal directly; they dispatch an [`Action`] and the reduced
//! value replaces the old one.

use dioxus::prelude::*;

use crate::store::{Action, AppState, UploadedFile};

#[derive(Clone, Copy, PartialEq)]
pub struct AppStore {
    state: Signal<AppState>,
}

impl AppStore {
    pub fn dispatch(&self, action: Action) {
        let mut state = self.state;
        let next = state.peek().reduce(action);
        state.set(next);
    }

    pub fn selected_camera_index(&self) -> Option<usize> {
        self.state.read().selected_camera_index
    }

    pub fn files(&self) -> Vec<UploadedFile> {
        self.state.read().files.clone()
    }

    pub fn current_report(&self) -> Option<UploadedFile> {
        self.state.read().current_report().cloned()
    }

    pub fn add_files(&self, files: Vec<UploadedFile>) {
        if !files.is_empty() {
            tracing::debug!("Adding {} file(s) to the store", files.len());
            self.dispatch(Action::AddFiles(files));
        }
    }
}

/// Initialize the store - call once at app root
pub fn use_store_provider() {
    let state = use_signal(AppState::default);
    use_context_provider(|| AppStore { state });
}

/// Get the application store - use in any component
pub fn use_app_store() -> AppStore {
    use_context::<AppStore>()
}
