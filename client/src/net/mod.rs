//! Networking modules for the user API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` builds and sends HTTP requests, `api` implements the three user
//! operations on top of it, `error` normalizes failures, and `types` defines
//! the wire schema.

pub mod api;
pub mod error;
pub mod gateway;
#[cfg(test)]
pub(crate) mod test_support;
pub mod types;
