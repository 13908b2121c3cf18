//! Client configuration resolved at compile time.
//!
//! The API base address is baked into the WASM bundle from the
//! `USERDIR_API_URL` environment variable at build time; storage key names are
//! fixed so every tab of the same origin agrees on them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base address used when `USERDIR_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "task-assessment-token";

/// `localStorage` key holding the `light`/`dark` theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Resolved API base address without a trailing slash.
pub fn api_base_url() -> String {
    resolve_api_base_url(option_env!("USERDIR_API_URL"))
}

fn resolve_api_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_owned()
}
