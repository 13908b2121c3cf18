//! Client-side form validation.
//!
//! Errors are per field and resolved entirely at the form boundary: a form
//! with any error never reaches the network layer.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::{LoginRequest, RegisterRequest};

/// Minimum password length in UTF-16 code units, the unit browsers use for
/// string length.
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Form field identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    FirstName,
    LastName,
}

/// Inline error per field; `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.get(Field::Email).is_none()
            && self.get(Field::Password).is_none()
            && self.get(Field::FirstName).is_none()
            && self.get(Field::LastName).is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
            Field::FirstName => self.first_name,
            Field::LastName => self.last_name,
        }
    }

    /// Drop the error for `field` once the user edits it.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Email => self.email = None,
            Field::Password => self.password = None,
            Field::FirstName => self.first_name = None,
            Field::LastName => self.last_name = None,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

fn email_error(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some("Email is required")
    } else if !is_valid_email(email) {
        Some("Invalid email format")
    } else {
        None
    }
}

fn password_error(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        Some("Password must be at least 8 characters")
    } else {
        None
    }
}

pub fn validate_login(form: &LoginRequest) -> FieldErrors {
    FieldErrors {
        email: email_error(&form.email),
        password: password_error(&form.password),
        ..FieldErrors::default()
    }
}

pub fn validate_register(form: &RegisterRequest) -> FieldErrors {
    FieldErrors {
        email: email_error(&form.email),
        password: password_error(&form.password),
        first_name: form.first_name.is_empty().then_some("First name is required"),
        last_name: form.last_name.is_empty().then_some("Last name is required"),
    }
}
