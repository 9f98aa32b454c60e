//! Errors returned by the backend API client.

use thiserror::Error;

/// A failed backend call.
///
/// Transport failures and non-2xx answers both end up here; the `Display`
/// text is what pages show to the user, so it always names the action and,
/// for rejections, the HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{action} failed: {source}")]
    Transport {
        action: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{action} failed: HTTP {status}{}", detail_suffix(.detail))]
    Status {
        action: &'static str,
        status: u16,
        detail: Option<String>,
    },

    #[error("{action} returned an unexpected response: {source}")]
    Decode {
        action: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) if !d.is_empty() => format!(" ({d})"),
        _ => String::new(),
    }
}

impl ApiError {
    /// HTTP status of a rejected request, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Pull a human readable message out of an error body.
///
/// The backend answers errors as `{"detail": "..."}`; validation errors use a
/// list of objects with a `msg` field instead.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|i| i.get("msg").and_then(|m| m.as_str()))
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        other => Some(other.to_string()),
    }
}
