//! Session observer: per-consumer auth state derived from the token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar, home page, and protected pages each mount their own observer.
//! There is no shared "current user" object; every observer re-reads the
//! token store whenever it is told something may have changed.
//!
//! DESIGN
//! ======
//! Two independent registrations feed one recompute handler:
//! - the in-process [`AuthBus`](super::auth_bus::AuthBus) for changes made in
//!   this tab;
//! - the browser `storage` event for changes made in other tabs.
//!
//! Both are released together when the observer is detached or dropped.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use leptos::prelude::*;

use super::auth_bus::Subscription;
use super::token::TokenStore;
use crate::config::TOKEN_STORAGE_KEY;
use crate::util::cross_tab::{self, StorageListener};

/// Live subscription that keeps a consumer's auth state current.
pub struct SessionObserver {
    bus: Subscription,
    storage: StorageListener,
}

impl SessionObserver {
    /// Report the current auth state to `on_change` immediately, then again
    /// after every notification on either channel.
    pub fn attach<F>(store: TokenStore, on_change: F) -> Self
    where
        F: Fn(bool) + 'static,
    {
        let bus = store.bus().clone();
        let on_change: Rc<dyn Fn(bool)> = Rc::new(on_change);
        let recompute = move || on_change(store.is_authenticated());

        // Notifications are not replayed, so seed from storage directly.
        recompute();

        let bus = bus.subscribe(recompute.clone());
        let storage = cross_tab::listen(TOKEN_STORAGE_KEY, recompute);
        Self { bus, storage }
    }

    pub fn is_active(&self) -> bool {
        self.bus.is_active()
    }

    /// Release both registrations.
    pub fn detach(self) {
        let Self { bus, storage } = self;
        bus.cancel();
        storage.remove();
    }
}

/// Reactive auth state for the calling component.
///
/// Reads `false` during server rendering and until the component has mounted
/// in the browser; the observer attaches on mount and detaches on cleanup.
pub fn use_auth_state() -> ReadSignal<bool> {
    let (authenticated, set_authenticated) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let observer = StoredValue::new_local(None::<SessionObserver>);
        Effect::new(move || {
            if observer.with_value(Option::is_some) {
                return;
            }
            let attached = SessionObserver::attach(TokenStore::browser(), move |state| {
                set_authenticated.set(state);
            });
            observer.set_value(Some(attached));
        });
        on_cleanup(move || {
            let _ = observer.try_update_value(|slot| {
                if let Some(active) = slot.take() {
                    active.detach();
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_authenticated;

    authenticated
}
