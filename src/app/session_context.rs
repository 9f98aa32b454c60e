//! Session context for the signed-in user.
//!
//! The stored session is read from client storage after mount (the server
//! render has no storage), so guarded pages wait for [`SessionContext::is_loaded`]
//! before deciding to redirect.

use std::sync::Arc;

use chrono::Utc;
use dioxus::prelude::*;

use crate::api::{ApiClient, ApiError, Credentials, RegisteredUser, Registration};
use crate::config::ClientConfig;
use crate::session::{self, Session, SessionStore};
use crate::settings::{self as settings_gate, GateState};
use crate::storage::{platform_storage, KeyValueStore};

#[derive(Clone, Copy, PartialEq)]
pub struct SessionContext {
    session: Signal<Option<Session>>,
    loaded: Signal<bool>,
    store: Signal<SessionStore>,
    storage: Signal<Arc<dyn KeyValueStore>>,
    /// Built once; every call gets a copy carrying the current token.
    api: Signal<Result<ApiClient, url::ParseError>>,
}

impl SessionContext {
    pub fn is_loaded(&self) -> bool {
        (self.loaded)()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session
            .read()
            .as_ref()
            .is_some_and(|s| !s.is_expired(Utc::now()))
    }

    pub fn username(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.username.clone())
    }

    pub fn session(&self) -> Option<Session> {
        self.session.read().clone()
    }

    /// Client storage, shared with the settings pages.
    pub fn storage(&self) -> Arc<dyn KeyValueStore> {
        self.storage.read().clone()
    }

    /// API client carrying the current bearer token, if any.
    pub fn client(&self) -> Result<ApiClient, ApiError> {
        let token = self.session.peek().as_ref().map(|s| s.token.clone());
        let api = self.api.peek().clone()?;
        Ok(api.with_token(token))
    }

    /// Log in; the session is stored only when the backend accepts.
    pub async fn sign_in(&self, credentials: Credentials) -> Result<(), ApiError> {
        let api = self.client()?;
        let store = self.store.peek().clone();
        let new_session = session::login(&api, &credentials, &store, Utc::now()).await?;
        let mut current = self.session;
        current.set(Some(new_session));
        Ok(())
    }

    /// Check `password` against the signed-in user's account.
    pub async fn verify_password(&self, password: &str) -> GateState {
        let Some(username) = self.username() else {
            return GateState::Rejected("Not signed in".to_string());
        };
        match self.client() {
            Ok(api) => settings_gate::verify_password(&api, &username, password).await,
            Err(e) => GateState::Rejected(e.to_string()),
        }
    }

    /// Create an account. Does not sign in.
    pub async fn register(&self, registration: Registration) -> Result<RegisteredUser, ApiError> {
        let user = self.client()?.register(&registration).await?;
        tracing::info!("Registered user {}", user.username);
        Ok(user)
    }

    pub fn sign_out(&self) {
        self.store.peek().clear();
        let mut current = self.session;
        current.set(None);
        tracing::info!("Signed out");
    }
}

/// Initialize session context provider - call once at app root
pub fn use_session_provider() {
    let config = use_hook(ClientConfig::from_build_env);
    let storage = use_signal(platform_storage);
    let store = use_signal(|| SessionStore::new(storage.peek().clone(), config.session_ttl_minutes));
    let api = use_signal(|| ApiClient::new(&config.api_base));
    let mut session = use_signal(|| None::<Session>);
    let mut loaded = use_signal(|| false);

    let ctx = SessionContext {
        session,
        loaded,
        store,
        storage,
        api,
    };
    use_context_provider(|| ctx);

    // Client-side only: effects do not run during the server render
    use_effect(move || {
        let restored = store.peek().load(Utc::now());
        if let Some(ref s) = restored {
            tracing::debug!("Restored session for {}", s.username);
        }
        session.set(restored);
        loaded.set(true);
    });
}

/// Get session context - use in any component
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
