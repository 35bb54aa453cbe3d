//! Persistence backends: opaque string slots addressed by key.
//!
//! The editor never interprets what a backend stores; it only writes the
//! encoded scene under one key and reads it back.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::error::LayoutError;

/// A key-value store of strings.
pub trait LayoutStore {
    /// Read the value stored under `key`, or `None` if the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, LayoutError>;

    /// Store `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), LayoutError>;
}

/// In-process store, useful for native hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, LayoutError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), LayoutError> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Browser `localStorage` backend.
#[cfg(feature = "web")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "web")]
impl LocalStorage {
    /// Open the current window's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if there is no window or storage access is denied.
    pub fn open() -> Result<Self, LayoutError> {
        let window = web_sys::window().ok_or_else(|| LayoutError::Storage("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| LayoutError::Storage(format!("{e:?}")))?
            .ok_or_else(|| LayoutError::Storage("localStorage unavailable".into()))?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "web")]
impl LayoutStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, LayoutError> {
        self.storage
            .get_item(key)
            .map_err(|e| LayoutError::Storage(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), LayoutError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| LayoutError::Storage(format!("{e:?}")))
    }
}
