//! Durable key-value storage
//!
//! The game persists two small JSON values: the high-score list and the
//! settings blob. Access is synchronous and best-effort: readers fall back
//! to defaults, writers report a [`StoreError`] the caller logs and swallows.
//! Nothing here panics across the boundary.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use thiserror::Error;

/// Storage write failure
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing store is unavailable (e.g. LocalStorage disabled)
    #[error("storage unavailable")]
    Unavailable,
    /// The store refused the write (quota, security policy)
    #[error("write rejected: {0}")]
    WriteRejected(String),
}

/// Minimal durable store contract
pub trait KeyValueStore {
    /// Read a value; None when missing or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Browser LocalStorage
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::WriteRejected(format!("{err:?}")))
    }
}

/// In-memory store for native runs and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, to exercise the degraded path
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Unavailable);
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
