//! Named navigation destinations and the session gate in front of them.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsSection {
    Main,
    Detection,
    Recognition,
    Notification,
    Additional,
    Streams,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 6] = [
        SettingsSection::Main,
        SettingsSection::Detection,
        SettingsSection::Recognition,
        SettingsSection::Notification,
        SettingsSection::Additional,
        SettingsSection::Streams,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            SettingsSection::Main => "main",
            SettingsSection::Detection => "detection",
            SettingsSection::Recognition => "recognition",
            SettingsSection::Notification => "notification",
            SettingsSection::Additional => "additional",
            SettingsSection::Streams => "streams",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SettingsSection::Main => "Cameras",
            SettingsSection::Detection => "Detection",
            SettingsSection::Recognition => "Face recognition",
            SettingsSection::Notification => "Notifications",
            SettingsSection::Additional => "Additional",
            SettingsSection::Streams => "Streams",
        }
    }
}

/// Every screen the dashboard can navigate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Login,
    Profile,
    Cameras,
    /// Camera detail by index into the camera list
    Camera(usize),
    Settings(SettingsSection),
    Data,
    Files,
    Staff,
    Report,
}

impl Destination {
    pub fn path(self) -> String {
        match self {
            Destination::Login => "/".to_string(),
            Destination::Profile => "/profile".to_string(),
            Destination::Cameras => "/cameras".to_string(),
            Destination::Camera(index) => format!("/cameras/{index}"),
            Destination::Settings(section) => format!("/cameras/settings/{}", section.slug()),
            Destination::Data => "/data".to_string(),
            Destination::Files => "/files".to_string(),
            Destination::Staff => "/staff".to_string(),
            Destination::Report => "/report".to_string(),
        }
    }

    pub fn requires_session(self) -> bool {
        self != Destination::Login
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Where a request for `dest` actually lands.
pub fn guard(dest: Destination, has_session: bool) -> Destination {
    if dest.requires_session() && !has_session {
        Destination::Login
    } else {
        dest
    }
}
