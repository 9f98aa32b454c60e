//! Authenticated session and its persistence.
//!
//! A session lives in client key-value storage under [`SESSION_KEY`] as JSON.
//! It carries an explicit expiry; an expired or unreadable entry is treated
//! as absent and removed on read. Logout removes the key.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, Credentials, TokenResponse};
use crate::storage::KeyValueStore;

pub const SESSION_KEY: &str = "authToken";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub token_type: String,
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: TokenResponse, username: &str, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            token: token.access_token,
            token_type: token.token_type,
            username: username.to_string(),
            issued_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    ttl: Duration,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, ttl_minutes: i64) -> Self {
        Self {
            storage,
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current session, if one is stored and still valid at `now`.
    pub fn load(&self, now: DateTime<Utc>) -> Option<Session> {
        let raw = self.storage.get(SESSION_KEY)?;
        let session = match serde_json::from_str::<Session>(&raw) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Discarding unreadable session: {}", e);
                self.clear();
                return None;
            }
        };
        if session.is_expired(now) {
            tracing::info!("Session for {} expired", session.username);
            self.clear();
            return None;
        }
        Some(session)
    }

    pub fn save(&self, session: &Session) {
        match serde_json::to_string(session) {
            Ok(json) => self.storage.set(SESSION_KEY, &json),
            Err(e) => tracing::warn!("Failed to serialize session: {}", e),
        }
    }

    pub fn clear(&self) {
        self.storage.remove(SESSION_KEY);
    }
}

/// Authenticate and, only on success, persist the new session.
pub async fn login(
    api: &ApiClient,
    credentials: &Credentials,
    store: &SessionStore,
    now: DateTime<Utc>,
) -> Result<Session, ApiError> {
    let token = api.login(credentials).await?;
    let session = Session::new(token, &credentials.username, now, store.ttl());
    store.save(&session);
    tracing::info!("Signed in as {}", session.username);
    Ok(session)
}
