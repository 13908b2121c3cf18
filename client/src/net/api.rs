//! Auth request service: register, login, and list-users.
//!
//! ERROR HANDLING
//! ==============
//! Each operation returns the decoded envelope on a 2xx response and an
//! [`AuthError`] otherwise; raw transport or protocol errors never reach a
//! page. The service reads the token store to attach the bearer header but
//! never writes it; callers decide when a session starts or ends.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::{AuthError, Operation, RequestFailure, normalize};
use super::gateway::{ApiGateway, ApiResponse, DefaultTransport, HttpTransport, TransportError};
use super::types::{ApiEnvelope, LoginData, LoginRequest, RegisterRequest, User};
use crate::config;
use crate::state::token::TokenStore;

pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";
pub const USERS_PATH: &str = "/auth/users";

/// Client for the three user API operations.
pub struct AuthService<T = DefaultTransport> {
    gateway: ApiGateway<T>,
    tokens: TokenStore,
}

impl AuthService<DefaultTransport> {
    /// Service wired to the configured API address and the browser token store.
    pub fn browser() -> Self {
        Self::new(
            ApiGateway::new(config::api_base_url(), DefaultTransport::default()),
            TokenStore::browser(),
        )
    }
}

impl<T: HttpTransport> AuthService<T> {
    pub fn new(gateway: ApiGateway<T>, tokens: TokenStore) -> Self {
        Self { gateway, tokens }
    }

    pub fn gateway(&self) -> &ApiGateway<T> {
        &self.gateway
    }

    /// Create an account via `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`AuthError`] for any non-2xx or failed request.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<ApiEnvelope<User>, AuthError> {
        let result = self.gateway.post_json(REGISTER_PATH, payload).await;
        settle(Operation::Register, result)
    }

    /// Authenticate via `POST /auth/login`. The caller persists the token.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`AuthError`] for any non-2xx or failed request.
    pub async fn login(&self, payload: &LoginRequest) -> Result<ApiEnvelope<LoginData>, AuthError> {
        let result = self.gateway.post_json(LOGIN_PATH, payload).await;
        settle(Operation::Login, result)
    }

    /// Fetch every registered user via `GET /auth/users`, sending the stored
    /// bearer token when there is one.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AuthorizationExpired`] on 401, otherwise the
    /// normalized [`AuthError`] for any non-2xx or failed request.
    pub async fn list_users(&self) -> Result<ApiEnvelope<Vec<User>>, AuthError> {
        let token = self.tokens.get_token();
        let result = self.gateway.get(USERS_PATH, token.as_deref()).await;
        settle(Operation::ListUsers, result)
    }
}

fn settle<D: DeserializeOwned>(
    op: Operation,
    result: Result<ApiResponse, TransportError>,
) -> Result<ApiEnvelope<D>, AuthError> {
    let failure = match result {
        Ok(response) if response.is_success() => match serde_json::from_str::<ApiEnvelope<D>>(&response.body) {
            Ok(envelope) => return Ok(envelope),
            Err(e) => RequestFailure::Decode(e.to_string()),
        },
        Ok(response) => RequestFailure::Status(response),
        Err(e) => RequestFailure::Transport(e),
    };
    leptos::logging::warn!("{} request failed: {failure:?}", op.label());
    Err(normalize(op, failure))
}
