//! Settings context for the stored camera settings.
//!
//! Shared between the settings pages and the camera grid (which starts in the
//! saved default layout).

use dioxus::prelude::*;

use crate::app::session_context::use_session;
use crate::settings::{CameraSettings, SettingsError};

#[derive(Clone, Copy)]
pub struct SettingsContext {
    settings: Signal<CameraSettings>,
    /// Whether settings have been loaded from storage
    loaded: Signal<bool>,
    session: crate::app::session_context::SessionContext,
}

impl SettingsContext {
    pub fn is_loaded(&self) -> bool {
        (self.loaded)()
    }

    pub fn get(&self) -> CameraSettings {
        self.settings.read().clone()
    }

    /// Apply `edit` to a copy, validate and persist it. The shared value only
    /// changes when saving succeeds.
    pub fn update(&self, edit: impl FnOnce(&mut CameraSettings)) -> Result<(), SettingsError> {
        let mut next = self.settings.peek().clone();
        edit(&mut next);
        next.save(self.session.storage().as_ref())?;
        let mut settings = self.settings;
        settings.set(next);
        Ok(())
    }
}

/// Initialize settings context provider - call once at app root, below the
/// session provider
pub fn use_settings_provider() {
    let session = use_session();
    let mut settings = use_signal(CameraSettings::default);
    let mut loaded = use_signal(|| false);

    let ctx = SettingsContext {
        settings,
        loaded,
        session,
    };
    use_context_provider(|| ctx);

    use_effect(move || {
        let storage = session.storage();
        settings.set(CameraSettings::load(storage.as_ref()));
        loaded.set(true);
    });
}

/// Get settings context - use in any component
pub fn use_settings() -> SettingsContext {
    use_context::<SettingsContext>()
}
