//! Durable key-value storage behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token store and the theme preference both persist through
//! `localStorage`. Centralizing the hydrate-only web-sys glue here lets the
//! session core run unchanged against an in-memory map in tests and degrade to
//! "no storage" during server rendering.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Failure reported by a storage backend write.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backend rejected the write (quota exceeded, private mode, etc.).
    #[error("storage write rejected: {0}")]
    Rejected(String),
}

/// Minimal string key-value store with `localStorage` semantics.
pub trait KeyValueStorage {
    /// Read the value stored under `key`.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Rejected`] if the backend refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Rejected`] if the backend refuses the removal.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage used by tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage` wrapper.
#[cfg(feature = "hydrate")]
pub struct BrowserStorage(web_sys::Storage);

#[cfg(feature = "hydrate")]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.0
            .remove_item(key)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }
}

/// The browser's `localStorage`, or `None` outside a browser (SSR, tests) or
/// when the browser denies access.
pub fn local_storage() -> Option<Rc<dyn KeyValueStorage>> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        Some(Rc::new(BrowserStorage(storage)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
