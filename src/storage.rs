//! Client-side key-value storage.
//!
//! The browser build persists to `localStorage`; everything else (server
//! rendering, tests) uses an in-memory map. Both sit behind
//! [`KeyValueStore`] so the session and settings code does not care which.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local storage, shared between clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// `window.localStorage`
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!("Failed to write {} to localStorage", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                tracing::warn!("Failed to remove {} from localStorage", key);
            }
        }
    }
}

/// Storage backend for the current platform.
pub fn platform_storage() -> Arc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(BrowserStorage)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(MemoryStorage::new())
    }
}
