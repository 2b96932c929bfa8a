//! Key-value storage capability for mode persistence.

use std::{collections::HashMap, sync::Mutex};

use web_sys::Storage;

/// Persistent key-value store for the chosen mode.
///
/// Absence of a key is a normal state, not a failure.
pub trait ModeStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any prior value.
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open the window's local storage.
    ///
    /// Returns `None` outside a browser environment or when storage access
    /// is denied.
    pub fn open() -> Option<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            if storage.is_none() {
                log::warn!("localStorage is unavailable; theme mode will not persist");
            }
            storage.map(|storage| Self { storage })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }
}

impl ModeStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = self.storage.set_item(key, value);
    }
}

/// In-memory store for non-browser embedders and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModeStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_fresh_key_is_absent() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_memory_store_set_overwrites() {
        let store = MemoryStore::new();
        store.set("key", "first");
        store.set("key", "second");
        assert_eq!(store.get("key"), Some("second".to_string()));
    }
}
