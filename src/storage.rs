//! Browser storage behind a small trait so the bookkeeping can run against an
//! in-memory map in tests.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use log::warn;
use thiserror::Error;
use web_sys::window;

pub const ENTRIES_KEY: &str = "giveaway_entries";
pub const ENTERED_KEY: &str = "giveaway_entered";
pub const EMAIL_KEY: &str = "giveaway_email";
pub const ENTRY_COUNT_KEY: &str = "entry_count";
pub const UTM_KEY: &str = "utm_params";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("failed to write `{key}` to storage")]
    Write { key: String },
    #[error("failed to encode stored value: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    /// Missing and unreadable values both come back as `None`.
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    pub fn local() -> Result<Self, StorageError> {
        let storage = window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }

    pub fn session() -> Result<Self, StorageError> {
        let storage = window()
            .and_then(|w| w.session_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|_| {
            warn!("Could not persist {}", key);
            StorageError::Write { key: key.to_string() }
        })
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(items: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (key, value) in items {
            store.items.borrow_mut().insert(key.to_string(), value.to_string());
        }
        store
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites() {
        let store = MemoryStore::with(&[(ENTRY_COUNT_KEY, "10")]);
        assert_eq!(store.get(ENTRY_COUNT_KEY).as_deref(), Some("10"));

        store.set(ENTRY_COUNT_KEY, "11").unwrap();
        assert_eq!(store.get(ENTRY_COUNT_KEY).as_deref(), Some("11"));
        assert_eq!(store.get(EMAIL_KEY), None);
    }
}
