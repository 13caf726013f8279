//! Demonstration login.
//!
//! There is no user store. A single configured credential pair unlocks the
//! partner pages and the cost calculator, and always yields the same demo
//! partner account.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// Username accepted when none is configured.
pub const DEFAULT_USERNAME: &str = "1234";
/// Password accepted when none is configured.
pub const DEFAULT_PASSWORD: &str = "1234";

/// Login failures.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// The signed-in visitor, as stored in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoUser {
    pub id: UserId,
    pub email: String,
    pub brpp_member: bool,
}

impl DemoUser {
    /// The account every successful login resolves to.
    #[must_use]
    pub fn partner() -> Self {
        Self {
            id: UserId::new("user-1234"),
            email: "user@example.com".to_string(),
            brpp_member: true,
        }
    }
}

/// The one credential pair the demo accepts.
#[derive(Clone, PartialEq, Eq)]
pub struct DemoCredentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for DemoCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl DemoCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check a login attempt.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] unless both fields match
    /// exactly.
    pub fn verify(&self, username: &str, password: &str) -> Result<DemoUser, AuthError> {
        if username == self.username && password == self.password {
            Ok(DemoUser::partner())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Check that a signup password was typed the same way twice.
///
/// # Errors
///
/// Returns [`AuthError::PasswordMismatch`] when they differ.
pub fn confirm_password(password: &str, confirmation: &str) -> Result<(), AuthError> {
    if password == confirmation {
        Ok(())
    } else {
        Err(AuthError::PasswordMismatch)
    }
}
