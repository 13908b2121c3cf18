//! Failure normalization for the user API.
//!
//! DESIGN
//! ======
//! Every request failure is folded into one closed set of variants by
//! [`normalize`], so pages pattern-match on [`AuthError`] instead of probing
//! raw response shapes. Precedence, first match wins:
//!
//! 1. `AuthorizationExpired`: a 401 on a protected call (out-of-band).
//! 2. `ServerMessage`: the response body carries a non-empty `message`.
//! 3. `Connectivity`: the request never reached the server.
//! 4. `Unknown`: anything else, with an operation-specific message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

use super::gateway::{ApiResponse, TransportError};

/// Banner text for requests that never reached the server.
pub const CONNECTIVITY_MESSAGE: &str = "Cannot connect to server. Please ensure the backend is running.";

/// The API operations issued by this client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Register,
    Login,
    ListUsers,
}

impl Operation {
    /// Fallback message when nothing more specific is known.
    pub fn default_message(self) -> &'static str {
        match self {
            Self::Register => "Registration failed. Please try again later.",
            Self::Login => "Login failed. Please check your credentials and try again.",
            Self::ListUsers => "Failed to fetch users. Please try again later.",
        }
    }

    /// Whether the call carries the bearer token.
    pub fn is_protected(self) -> bool {
        matches!(self, Self::ListUsers)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Login => "login",
            Self::ListUsers => "list-users",
        }
    }
}

/// Normalized request failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Human-readable message supplied by the API, passed through verbatim.
    #[error("{0}")]
    ServerMessage(String),

    /// The server could not be reached.
    #[error("{}", CONNECTIVITY_MESSAGE)]
    Connectivity,

    /// Unrecognized failure; carries the operation's default message.
    #[error("{0}")]
    Unknown(&'static str),

    /// The session token was rejected by a protected endpoint.
    #[error("session expired")]
    AuthorizationExpired,
}

impl AuthError {
    pub fn is_authorization_expired(&self) -> bool {
        matches!(self, Self::AuthorizationExpired)
    }

    /// Text for the page-level error banner. Expired sessions are handled by
    /// redirecting, never by a banner.
    pub fn banner_message(&self) -> Option<String> {
        match self {
            Self::AuthorizationExpired => None,
            other => Some(other.to_string()),
        }
    }
}

/// Raw failure observed by the service before normalization.
#[derive(Debug)]
pub enum RequestFailure {
    /// The transport could not complete the exchange.
    Transport(TransportError),
    /// The server answered with a non-2xx status.
    Status(ApiResponse),
    /// A 2xx body was not a valid envelope.
    Decode(String),
}

/// Fold a raw failure into the closed [`AuthError`] taxonomy.
pub fn normalize(op: Operation, failure: RequestFailure) -> AuthError {
    match failure {
        RequestFailure::Status(response) => {
            if op.is_protected() && response.status == 401 {
                return AuthError::AuthorizationExpired;
            }
            server_message(&response.body)
                .map_or(AuthError::Unknown(op.default_message()), AuthError::ServerMessage)
        }
        RequestFailure::Transport(TransportError::Network(_) | TransportError::Unavailable) => AuthError::Connectivity,
        RequestFailure::Transport(TransportError::Build(_) | TransportError::Body(_)) | RequestFailure::Decode(_) => {
            AuthError::Unknown(op.default_message())
        }
    }
}

/// Extract the `message` field of an error body. Validation failures may send
/// a list of messages; those are joined.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        Value::String(message) if !message.trim().is_empty() => Some(message.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(Value::as_str)
                .filter(|part| !part.trim().is_empty())
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}
