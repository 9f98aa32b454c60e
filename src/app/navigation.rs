//! Named navigation handlers.
//!
//! Each handler performs exactly one route transition. `logout` also clears
//! the stored session first.

use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::app::session_context::{use_session, SessionContext};
use crate::app::Route;
use crate::nav::{Destination, SettingsSection};

#[derive(Clone, Copy)]
pub struct Navigation {
    navigator: Navigator,
    session: SessionContext,
}

pub fn use_navigation() -> Navigation {
    Navigation {
        navigator: use_navigator(),
        session: use_session(),
    }
}

impl Navigation {
    fn go(&self, dest: Destination) {
        tracing::debug!("Navigating to {}", dest);
        self.navigator.push(Route::from(dest));
    }

    pub fn go_to_profile(&self) {
        self.go(Destination::Profile);
    }

    pub fn go_to_cameras(&self) {
        self.go(Destination::Cameras);
    }

    pub fn go_to_camera(&self, index: usize) {
        self.go(Destination::Camera(index));
    }

    pub fn go_to_settings(&self) {
        self.go(Destination::Settings(SettingsSection::Main));
    }

    pub fn go_to_settings_section(&self, section: SettingsSection) {
        self.go(Destination::Settings(section));
    }

    pub fn go_to_report(&self) {
        self.go(Destination::Report);
    }

    pub fn go_to_data(&self) {
        self.go(Destination::Data);
    }

    pub fn go_to_files(&self) {
        self.go(Destination::Files);
    }

    pub fn go_to_staff(&self) {
        self.go(Destination::Staff);
    }

    pub fn logout(&self) {
        self.session.sign_out();
        self.navigator.replace(Route::from(Destination::Login));
    }
}
