//! Wire DTOs for the user API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON. Every response arrives in the
//! same [`ApiEnvelope`]; payload types never carry transport concerns.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::{AuthError, Operation};

/// A registered user as returned by the API. Read-only on the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    /// ISO-8601 last-update timestamp.
    pub updated_at: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `data` payload of a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub access_token: String,
    pub user: User,
}

/// Uniform response wrapper: `{success, message, data?, error?}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// The payload of a successful envelope.
    ///
    /// # Errors
    ///
    /// An envelope reporting `success: false` yields its own message as
    /// [`AuthError::ServerMessage`] when present. A successful envelope
    /// without `data`, or a failed one without a message, yields the
    /// operation's default. The message of a successful envelope is never an
    /// error.
    pub fn into_data(self, op: Operation) -> Result<T, AuthError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (false, _) if !self.message.trim().is_empty() => Err(AuthError::ServerMessage(self.message)),
            _ => Err(AuthError::Unknown(op.default_message())),
        }
    }
}
