use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Local storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Local storage key holding the serialized profile JSON.
pub const USER_KEY: &str = "user";

/// Synchronous string key/value store for session credentials.
///
/// The browser build backs this with `window.localStorage`; native builds
/// and tests use [`MemoryStore`].
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store. Values live as long as the store does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> R {
        // A poisoned lock only means another test thread panicked mid-write.
        let mut guard = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.with_entries(|m| m.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        self.with_entries(|m| {
            m.insert(key.to_string(), value.to_string());
        });
    }

    fn remove(&self, key: &str) {
        self.with_entries(|m| {
            m.remove(key);
        });
    }
}

/// `window.localStorage`. Every call re-resolves the storage object; when it
/// is unavailable (private mode, sandboxed iframe) reads return `None` and
/// writes are dropped.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(s) => {
                if s.set_item(key, value).is_err() {
                    tracing::warn!(key, "localStorage rejected write");
                }
            }
            None => tracing::warn!(key, "localStorage unavailable, value not persisted"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(s) = Self::storage() {
            if s.remove_item(key).is_err() {
                tracing::warn!(key, "localStorage rejected removal");
            }
        }
    }
}

/// The store appropriate for the current target.
pub fn default_store() -> Arc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(BrowserStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(MemoryStore::new())
    }
}
