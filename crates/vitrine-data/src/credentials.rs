//! Credential storage capability.
//!
//! The bearer token lives in a single named slot. The capability is
//! injected so the client and the session store never probe the
//! environment: the browser build gets [`WebCredentialStore`], everything
//! else (tests, native tooling) gets [`MemoryCredentialStore`].

use std::sync::Mutex;

/// Storage slot name for the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Read/write access to the persisted bearer token.
pub trait CredentialStore {
    /// Read the stored token, if any.
    fn load(&self) -> Option<String>;

    /// Persist a token.
    fn store(&self, token: &str);

    /// Remove the stored token.
    fn clear(&self);
}

/// Browser-persistent credential storage backed by localStorage.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WebCredentialStore;

#[cfg(target_arch = "wasm32")]
impl WebCredentialStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl CredentialStore for WebCredentialStore {
    fn load(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }

    fn store(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                log::warn!("failed to persist credential");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// In-memory credential storage for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn store(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.load(), None);

        store.store("tok-1");
        assert_eq!(store.load(), Some("tok-1".to_string()));

        store.store("tok-2");
        assert_eq!(store.load(), Some("tok-2".to_string()));

        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_memory_store_with_token() {
        let store = MemoryCredentialStore::with_token("seeded");
        assert_eq!(store.load(), Some("seeded".to_string()));
    }
}
