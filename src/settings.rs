//! Camera settings: thresholds, notification channel, default grid layout.
//!
//! Settings are kept client-side under [`SETTINGS_KEY`]. The settings pages
//! sit behind a password gate that re-authenticates the signed-in user.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::{ApiClient, Credentials};
use crate::grid::LayoutMode;
use crate::storage::KeyValueStore;

pub const SETTINGS_KEY: &str = "camera-settings";

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("{field}: {value:?} is not a number")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be between 0 and 1, got {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("password must not be empty")]
    EmptyPassword,
}

// =============================================================================
// Thresholds
// =============================================================================

/// Parse a threshold input; accepts numbers in `[0, 1]` only.
pub fn parse_threshold(field: &'static str, input: &str) -> Result<f64, SettingsError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| SettingsError::NotANumber {
            field,
            value: input.to_string(),
        })?;
    check_threshold(field, value)
}

fn check_threshold(field: &'static str, value: f64) -> Result<f64, SettingsError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SettingsError::OutOfRange { field, value })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionThresholds {
    pub face: f64,
    pub silhouette: f64,
    /// Intersection over Union
    pub iou: f64,
}

impl Default for DetectionThresholds {
    fn default() -> Self {
        Self {
            face: 0.7,
            silhouette: 0.7,
            iou: 0.8,
        }
    }
}

impl DetectionThresholds {
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_threshold("Face detection threshold", self.face)?;
        check_threshold("Silhouette detection threshold", self.silhouette)?;
        check_threshold("IoU threshold", self.iou)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecognitionThresholds {
    pub recognition: f64,
    pub similarity: f64,
}

impl Default for RecognitionThresholds {
    fn default() -> Self {
        Self {
            recognition: 0.8,
            similarity: 0.8,
        }
    }
}

impl RecognitionThresholds {
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_threshold("Face recognition threshold", self.recognition)?;
        check_threshold("Similarity threshold", self.similarity)?;
        Ok(())
    }
}

// =============================================================================
// Notifications
// =============================================================================

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

static PHONE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").ok());

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Email,
    Phone,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Email => "email",
            NotificationKind::Phone => "phone",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "email" => Some(NotificationKind::Email),
            "phone" => Some(NotificationKind::Phone),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::Email => "Email",
            NotificationKind::Phone => "SMS to phone",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            NotificationKind::Email => "Enter an email address:",
            NotificationKind::Phone => "Enter a phone number:",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            NotificationKind::Email => "example@email.com",
            NotificationKind::Phone => "+79876543210",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationChannel {
    pub kind: NotificationKind,
    pub address: String,
}

impl NotificationChannel {
    /// Validate and normalize an address. Phone numbers may be typed with
    /// spaces, dashes or parentheses.
    pub fn new(kind: NotificationKind, address: &str) -> Result<Self, SettingsError> {
        let address = address.trim();
        match kind {
            NotificationKind::Email => {
                if EMAIL_RE.as_ref().is_some_and(|re| re.is_match(address)) {
                    Ok(Self {
                        kind,
                        address: address.to_string(),
                    })
                } else {
                    Err(SettingsError::InvalidEmail(address.to_string()))
                }
            }
            NotificationKind::Phone => {
                let digits: String = address
                    .chars()
                    .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
                    .collect();
                if PHONE_RE.as_ref().is_some_and(|re| re.is_match(&digits)) {
                    Ok(Self {
                        kind,
                        address: digits,
                    })
                } else {
                    Err(SettingsError::InvalidPhone(address.to_string()))
                }
            }
        }
    }
}

// =============================================================================
// Persisted settings
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub detection: DetectionThresholds,
    pub recognition: RecognitionThresholds,
    pub notification: Option<NotificationChannel>,
    pub default_layout: LayoutMode,
}

impl CameraSettings {
    /// Stored settings, or defaults when nothing readable is stored.
    pub fn load(storage: &dyn KeyValueStore) -> Self {
        let Some(raw) = storage.get(SETTINGS_KEY) else {
            return Self::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable camera settings: {}", e);
            Self::default()
        })
    }

    pub fn save(&self, storage: &dyn KeyValueStore) -> Result<(), SettingsError> {
        self.detection.validate()?;
        self.recognition.validate()?;
        match serde_json::to_string(self) {
            Ok(json) => {
                storage.set(SETTINGS_KEY, &json);
                tracing::debug!("Camera settings saved");
            }
            Err(e) => tracing::warn!("Failed to serialize camera settings: {}", e),
        }
        Ok(())
    }
}

// =============================================================================
// Password gate
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub enum GateState {
    #[default]
    Locked,
    Verifying,
    Unlocked,
    Rejected(String),
}

impl GateState {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, GateState::Unlocked)
    }
}

/// Check `password` by re-authenticating `username` against the backend.
pub async fn verify_password(api: &ApiClient, username: &str, password: &str) -> GateState {
    if password.is_empty() {
        return GateState::Rejected(SettingsError::EmptyPassword.to_string());
    }
    let credentials = Credentials {
        username: username.to_string(),
        password: password.to_string(),
    };
    match api.login(&credentials).await {
        Ok(_) => GateState::Unlocked,
        Err(e) if e.is_unauthorized() => GateState::Rejected("Incorrect password".to_string()),
        Err(e) => {
            tracing::warn!("Settings password check failed: {}", e);
            GateState::Rejected(e.to_string())
        }
    }
}
