//! User directory state for the protected users view.
//!
//! DESIGN
//! ======
//! Fetch results are applied through [`UserListState::apply`] so the loading,
//! error, and empty transitions can be tested without rendering. An expired
//! session is not an error here: the session is torn down and the view simply
//! stops loading while navigation takes over.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos_router::NavigateOptions;

use crate::net::api::AuthService;
use crate::net::error::{AuthError, Operation};
use crate::net::gateway::HttpTransport;
use crate::net::types::User;
use crate::state::token::TokenStore;
use crate::util::auth::expire_session;

/// Result of one list-users round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UsersOutcome {
    Loaded(Vec<User>),
    /// Banner message for a failed fetch.
    Failed(String),
    /// The session was rejected and has been torn down.
    Expired,
}

/// What the user list should currently render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserListView {
    Loading,
    Error,
    Empty,
    Populated,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserListState {
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl UserListState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply(&mut self, outcome: UsersOutcome) {
        self.loading = false;
        match outcome {
            UsersOutcome::Loaded(users) => self.users = users,
            UsersOutcome::Failed(message) => self.error = Some(message),
            UsersOutcome::Expired => {}
        }
    }

    pub fn view(&self) -> UserListView {
        if self.loading {
            UserListView::Loading
        } else if self.error.is_some() {
            UserListView::Error
        } else if self.users.is_empty() {
            UserListView::Empty
        } else {
            UserListView::Populated
        }
    }
}

/// Fetch the directory. A 401 clears the session and replaces the current
/// view with `/login`; other failures become banner text.
pub async fn fetch_users<T, F>(service: &AuthService<T>, store: &TokenStore, navigate: &F) -> UsersOutcome
where
    T: HttpTransport,
    F: Fn(&str, NavigateOptions),
{
    let result = service
        .list_users()
        .await
        .and_then(|envelope| envelope.into_data(Operation::ListUsers));
    match result {
        Ok(users) => UsersOutcome::Loaded(users),
        Err(AuthError::AuthorizationExpired) => {
            expire_session(store, navigate);
            UsersOutcome::Expired
        }
        Err(err) => UsersOutcome::Failed(err.to_string()),
    }
}
