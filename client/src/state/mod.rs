//! Client-side session state.
//!
//! DESIGN
//! ======
//! `token` is the only stored state; `auth_bus` announces its changes and
//! `auth` turns those announcements into per-component reactive state. The
//! user list keeps its own view state in `users`.

pub mod auth;
pub mod auth_bus;
pub mod token;
pub mod users;
