//! Browser `storage` event binding for changes made in other tabs.
//!
//! The platform fires `storage` on every other document of the same origin
//! when `localStorage` changes; this tab never emits it. Registration is
//! hydrate-only; elsewhere [`listen`] returns an inert handle.

#[cfg(test)]
#[path = "cross_tab_test.rs"]
mod cross_tab_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

/// Live `storage` listener; removed from the window on [`StorageListener::remove`]
/// or drop.
#[must_use = "dropping a StorageListener removes it immediately"]
pub struct StorageListener {
    #[cfg(feature = "hydrate")]
    registration: Option<(web_sys::Window, Closure<dyn FnMut(web_sys::StorageEvent)>)>,
}

impl StorageListener {
    fn inert() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            registration: None,
        }
    }

    pub fn is_registered(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.registration.is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    pub fn remove(mut self) {
        self.release();
    }

    fn release(&mut self) {
        #[cfg(feature = "hydrate")]
        if let Some((window, callback)) = self.registration.take() {
            let _ = window.remove_event_listener_with_callback("storage", callback.as_ref().unchecked_ref());
        }
    }
}

impl Drop for StorageListener {
    fn drop(&mut self) {
        self.release();
    }
}

/// Run `on_change` whenever another tab changes `key` (or clears storage).
pub fn listen<F>(key: &'static str, on_change: F) -> StorageListener
where
    F: Fn() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return StorageListener::inert();
        };
        let callback = Closure::wrap(Box::new(move |ev: web_sys::StorageEvent| {
            if key_matches(ev.key().as_deref(), key) {
                on_change();
            }
        }) as Box<dyn FnMut(web_sys::StorageEvent)>);

        if window
            .add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("storage listener registration failed");
            return StorageListener::inert();
        }
        StorageListener { registration: Some((window, callback)) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, on_change);
        StorageListener::inert()
    }
}

/// A `null` key means the other tab called `localStorage.clear()`.
#[cfg(any(test, feature = "hydrate"))]
fn key_matches(changed: Option<&str>, watched: &str) -> bool {
    changed.is_none_or(|key| key == watched)
}
