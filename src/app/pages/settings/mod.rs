//! Settings pages. Each one sits behind the password gate in
//! [`SettingsShell`](crate::app::components::SettingsShell).

mod additional;
mod cameras;
mod detection;
mod notification;
mod recognition;
mod streams;

pub use additional::SettingsAdditional;
pub use cameras::SettingsMain;
pub use detection::SettingsDetection;
pub use notification::SettingsNotification;
pub use recognition::SettingsRecognition;
pub use streams::SettingsStreams;

use dioxus::prelude::*;

/// Result line under a settings form.
#[component]
fn SaveStatus(result: Option<Result<(), String>>) -> Element {
    match result {
        Some(Ok(())) => rsx! { p { class: "form-notice", "Settings saved" } },
        Some(Err(msg)) => rsx! { p { class: "form-error", "{msg}" } },
        None => rsx! {},
    }
}
