//! Light/dark theme preference.
//!
//! Reads the stored preference from `localStorage` under `theme`, falling back
//! to `prefers-color-scheme`, and applies it as the `dark` class on the
//! `<html>` element. Toggling writes the new value back.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::config::THEME_STORAGE_KEY;
use crate::util::storage::KeyValueStorage;

/// Persisted color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything but `light`/`dark` is ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Label for the toggle button describing the action it performs.
    pub fn switch_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

/// Resolve the theme from storage, falling back to the system preference.
pub fn resolve(storage: Option<&dyn KeyValueStorage>, prefers_dark: bool) -> Theme {
    storage
        .and_then(|s| s.get_item(THEME_STORAGE_KEY))
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

/// Write `theme` to storage. Write failures are ignored.
pub fn persist(storage: Option<&dyn KeyValueStorage>, theme: Theme) {
    if let Some(storage) = storage {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Read the effective preference from browser storage.
pub fn read_preference() -> Theme {
    let storage = crate::util::storage::local_storage();
    resolve(storage.as_deref(), system_prefers_dark())
}

/// Toggle the `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.class_list().toggle_with_force("dark", theme.is_dark());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    let storage = crate::util::storage::local_storage();
    persist(storage.as_deref(), next);
    next
}
