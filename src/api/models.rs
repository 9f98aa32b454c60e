//! Typed records exchanged with the backend.
//!
//! Every response is decoded into one of these before it reaches a page, so a
//! shape mismatch surfaces as [`ApiError::Decode`](super::ApiError::Decode)
//! instead of a silently missing field.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// Identifiers
// =============================================================================

/// Backend entity identifier.
///
/// The backend issues integer ids, but the identifier only ever travels back
/// into a URL path, so string ids are accepted too.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, when the id is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for Id {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_i64() {
            Some(n) => serializer.serialize_i64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => Id::from(n),
            RawId::Text(s) => Id(s),
        })
    }
}

/// Anything held in a data-hook collection.
pub trait Entity: Clone {
    fn id(&self) -> Id;
    /// Name shown in pickers; selection by name matches on this.
    fn display_name(&self) -> &str;
}

// =============================================================================
// Auth Types
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RegisteredUser {
    pub id: Id,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

// =============================================================================
// Camera Types
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Camera {
    pub id: Id,
    pub name: String,
    /// Video source URL
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Entity for Camera {
    fn id(&self) -> Id {
        self.id.clone()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Draft for creating or updating a camera.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NewCamera {
    pub name: String,
    pub url: String,
    pub description: String,
    pub is_active: bool,
}

impl Default for NewCamera {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            description: String::new(),
            is_active: true,
        }
    }
}

impl From<&Camera> for NewCamera {
    fn from(camera: &Camera) -> Self {
        Self {
            name: camera.name.clone(),
            url: camera.url.clone(),
            description: camera.description.clone().unwrap_or_default(),
            is_active: camera.is_active,
        }
    }
}

// =============================================================================
// Person / Face Types
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Face {
    pub id: Id,
    #[serde(default)]
    pub person_id: Option<Id>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub faces: Vec<Face>,
}

impl Entity for Person {
    fn id(&self) -> Id {
        self.id.clone()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct NewPerson {
    pub name: String,
}

/// Answer to a face-photo upload
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FaceUploadResult {
    #[serde(default)]
    pub processed: usize,
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Stream Processor Types
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StreamProcessor {
    pub name: String,
    #[serde(default)]
    pub camera_id: Option<Id>,
}

impl Entity for StreamProcessor {
    /// Stream processors are addressed by name.
    fn id(&self) -> Id {
        Id::new(self.name.clone())
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct NewStream {
    pub name: String,
    pub camera_id: Option<i64>,
}

/// Answer to a stream processor deployment
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StreamDeployment {
    pub name: String,
    #[serde(default)]
    pub container_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StreamStatus {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub details: Option<String>,
}

// =============================================================================
// Files
// =============================================================================

/// Binary download, e.g. a camera log report.
#[derive(Clone, Debug, PartialEq)]
pub struct DownloadedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Filename from a `Content-Disposition` header.
pub(crate) fn disposition_filename(header: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|part| {
        let value = part.strip_prefix("filename=")?;
        let value = value.trim_matches('"');
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    })
}
