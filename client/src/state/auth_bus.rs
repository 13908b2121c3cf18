//! In-process auth change notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token store emits on this bus after every write or clear so that
//! independently mounted session observers can re-derive auth state without
//! knowing about each other. Changes made in other tabs arrive through the
//! browser `storage` event instead (see `util::cross_tab`).
//!
//! DESIGN
//! ======
//! Listeners are owned by the bus and removed when their `Subscription` guard
//! is cancelled or dropped, so a torn-down observer can never be called back.
//! Delivery is synchronous over a snapshot of the listener set: listeners may
//! subscribe or unsubscribe while an emit is in progress, and a listener
//! removed mid-emit is skipped.

#[cfg(test)]
#[path = "auth_bus_test.rs"]
mod auth_bus_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

/// Name of the in-process auth change signal.
pub const AUTH_EVENT_NAME: &str = "auth-token-change";

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Tab-wide "re-evaluate auth state now" signal.
///
/// Cloning yields another handle to the same listener set.
#[derive(Clone, Default)]
pub struct AuthBus {
    registry: Rc<RefCell<Registry>>,
}

thread_local! {
    static TAB_BUS: AuthBus = AuthBus::default();
}

impl AuthBus {
    /// A fresh, isolated bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// The bus shared by every component in this tab.
    pub fn global() -> Self {
        TAB_BUS.with(Clone::clone)
    }

    /// Register `listener`; it stays registered until the returned guard is
    /// cancelled or dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Rc::new(listener));
        Subscription {
            registry: Rc::downgrade(&self.registry),
            id: Some(id),
        }
    }

    /// Notify every listener registered at call time. Returns how many ran.
    pub fn emit(&self) -> usize {
        let snapshot: Vec<(u64, Listener)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        let mut delivered = 0;
        for (id, listener) in snapshot {
            if !self.registry.borrow().listeners.contains_key(&id) {
                continue;
            }
            listener();
            delivered += 1;
        }
        delivered
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Registration guard returned by [`AuthBus::subscribe`].
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: Option<u64>,
}

impl Subscription {
    /// Deregister the listener now.
    pub fn cancel(mut self) {
        self.release();
    }

    pub fn is_active(&self) -> bool {
        let Some(id) = self.id else {
            return false;
        };
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().listeners.contains_key(&id))
    }

    fn release(&mut self) {
        if let (Some(id), Some(registry)) = (self.id.take(), self.registry.upgrade()) {
            registry.borrow_mut().listeners.remove(&id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}
