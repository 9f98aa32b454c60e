//! Dioxus page components, one per route.
//!
//! Pages read data through the hooks in [`crate::app::hooks`] and never talk
//! to the backend directly.

mod camera_detail;
pub(crate) mod cameras;
mod data;
mod files;
mod login;
mod profile;
mod report;
mod settings;
mod staff;

pub use camera_detail::CameraDetail;
pub use cameras::Cameras;
pub use data::Data;
pub use files::Files;
pub use login::Login;
pub use profile::Profile;
pub use report::Report;
pub use settings::{
    SettingsAdditional, SettingsDetection, SettingsMain, SettingsNotification,
    SettingsRecognition, SettingsStreams,
};
pub use staff::Staff;
