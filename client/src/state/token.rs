//! Bearer-token persistence: the single source of truth for "logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! Login writes the token, logout and expired-session handling clear it, and
//! every session observer re-derives auth state from here. Each write or clear
//! is followed by exactly one emit on the [`AuthBus`].
//!
//! TRADE-OFFS
//! ==========
//! Without durable storage (server rendering, locked-down browsers) the store
//! behaves as "no session": reads return `None`, writes and clears silently do
//! nothing and emit nothing.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::rc::Rc;

use super::auth_bus::AuthBus;
use crate::config::TOKEN_STORAGE_KEY;
use crate::util::storage::{self, KeyValueStorage};

/// Handle to the persisted session token.
///
/// Cheap to clone; clones share the same storage and bus.
#[derive(Clone)]
pub struct TokenStore {
    storage: Option<Rc<dyn KeyValueStorage>>,
    bus: AuthBus,
}

impl TokenStore {
    pub fn new(storage: Option<Rc<dyn KeyValueStorage>>, bus: AuthBus) -> Self {
        Self { storage, bus }
    }

    /// Store backed by `localStorage` and the tab-wide bus.
    pub fn browser() -> Self {
        Self::new(storage::local_storage(), AuthBus::global())
    }

    pub fn bus(&self) -> &AuthBus {
        &self.bus
    }

    pub fn has_storage(&self) -> bool {
        self.storage.is_some()
    }

    /// Persist `token`, replacing any previous one, then notify.
    ///
    /// Empty tokens are not sessions and are ignored.
    pub fn set_token(&self, token: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if token.is_empty() {
            leptos::logging::warn!("ignoring empty session token");
            return;
        }
        if let Err(e) = storage.set_item(TOKEN_STORAGE_KEY, token) {
            leptos::logging::warn!("session token write failed: {e}");
        }
        self.bus.emit();
    }

    /// The persisted token, if any.
    pub fn get_token(&self) -> Option<String> {
        self.storage
            .as_ref()?
            .get_item(TOKEN_STORAGE_KEY)
            .filter(|token| !token.is_empty())
    }

    /// Remove the persisted token, then notify. Clearing an absent token
    /// still notifies exactly once.
    pub fn clear_token(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = storage.remove_item(TOKEN_STORAGE_KEY) {
            leptos::logging::warn!("session token removal failed: {e}");
        }
        self.bus.emit();
    }

    /// Auth state derived fresh from storage on every call.
    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }
}
