//! Dioxus fullstack application entry point.
//!
//! This module provides the root App component, the route table and the
//! session guard in front of every route except the login page.

use dioxus::prelude::*;

pub mod components;
pub mod download;
pub mod hooks;
pub mod navigation;
pub mod pages;
pub mod session_context;
pub mod settings_context;
pub mod store_context;

use components::Loading;
use pages::{
    CameraDetail, Cameras, Data, Files, Login, Profile, Report, SettingsAdditional,
    SettingsDetection, SettingsMain, SettingsNotification, SettingsRecognition, SettingsStreams,
    Staff,
};
use session_context::{use_session, use_session_provider};
use settings_context::use_settings_provider;
use store_context::use_store_provider;

use crate::nav::{self, Destination, SettingsSection};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Session first: the settings provider reads storage through it
    use_session_provider();
    use_store_provider();
    use_settings_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/public/dashboard.css") }
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Login {},

    #[layout(AuthGuard)]
        #[route("/profile")]
        Profile {},
        #[route("/cameras")]
        Cameras {},
        #[route("/cameras/settings/main")]
        SettingsMain {},
        #[route("/cameras/settings/detection")]
        SettingsDetection {},
        #[route("/cameras/settings/recognition")]
        SettingsRecognition {},
        #[route("/cameras/settings/notification")]
        SettingsNotification {},
        #[route("/cameras/settings/additional")]
        SettingsAdditional {},
        #[route("/cameras/settings/streams")]
        SettingsStreams {},
        #[route("/cameras/:id")]
        CameraDetail { id: usize },
        #[route("/data")]
        Data {},
        #[route("/files")]
        Files {},
        #[route("/staff")]
        Staff {},
        #[route("/report")]
        Report {},
}

impl From<Destination> for Route {
    fn from(dest: Destination) -> Self {
        match dest {
            Destination::Login => Route::Login {},
            Destination::Profile => Route::Profile {},
            Destination::Cameras => Route::Cameras {},
            Destination::Camera(id) => Route::CameraDetail { id },
            Destination::Settings(section) => match section {
                SettingsSection::Main => Route::SettingsMain {},
                SettingsSection::Detection => Route::SettingsDetection {},
                SettingsSection::Recognition => Route::SettingsRecognition {},
                SettingsSection::Notification => Route::SettingsNotification {},
                SettingsSection::Additional => Route::SettingsAdditional {},
                SettingsSection::Streams => Route::SettingsStreams {},
            },
            Destination::Data => Route::Data {},
            Destination::Files => Route::Files {},
            Destination::Staff => Route::Staff {},
            Destination::Report => Route::Report {},
        }
    }
}

impl From<&Route> for Destination {
    fn from(route: &Route) -> Self {
        match route {
            Route::Login {} => Destination::Login,
            Route::Profile {} => Destination::Profile,
            Route::Cameras {} => Destination::Cameras,
            Route::SettingsMain {} => Destination::Settings(SettingsSection::Main),
            Route::SettingsDetection {} => Destination::Settings(SettingsSection::Detection),
            Route::SettingsRecognition {} => Destination::Settings(SettingsSection::Recognition),
            Route::SettingsNotification {} => Destination::Settings(SettingsSection::Notification),
            Route::SettingsAdditional {} => Destination::Settings(SettingsSection::Additional),
            Route::SettingsStreams {} => Destination::Settings(SettingsSection::Streams),
            Route::CameraDetail { id } => Destination::Camera(*id),
            Route::Data {} => Destination::Data,
            Route::Files {} => Destination::Files,
            Route::Staff {} => Destination::Staff,
            Route::Report {} => Destination::Report,
        }
    }
}

/// Redirects to the login page when there is no live session.
#[component]
fn AuthGuard() -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let route = use_route::<Route>();

    let requested = Destination::from(&route);
    let allowed = nav::guard(requested, session.is_authenticated());

    use_effect(use_reactive!(|(requested, allowed)| {
        if session.is_loaded() && allowed != requested {
            tracing::debug!("No session for {}, redirecting to {}", requested, allowed);
            navigator.replace(Route::from(allowed));
        }
    }));

    if !session.is_loaded() || allowed != requested {
        return rsx! { Loading {} };
    }

    rsx! { Outlet::<Route> {} }
}
