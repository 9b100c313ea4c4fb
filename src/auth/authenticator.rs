//! Email and Password Authenticator
//!
//! Resolves a login attempt to the user's display name. The email is matched
//! case-insensitively through a [`UserLookup`] provider and the password is
//! compared exactly.
//!
//! # Failure model
//! Every failed attempt yields `None`: empty input, input over the optional
//! length cap, unknown email, wrong password and store errors all look the
//! same to the caller.
//! The reason is only visible in the logs.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::credentials::{normalize_email, Credentials};
use crate::config::AuthConfig;
use crate::db::UserLookup;

/// Authenticates credentials against an injected user store
pub struct Authenticator<L> {
    lookup: Arc<L>,
    max_credential_length: Option<usize>,
}

impl<L> Clone for Authenticator<L> {
    fn clone(&self) -> Self {
        Self {
            lookup: Arc::clone(&self.lookup),
            max_credential_length: self.max_credential_length,
        }
    }
}

impl<L: UserLookup> Authenticator<L> {
    /// Creates an authenticator backed by `lookup`, with no length cap
    pub fn new(lookup: Arc<L>) -> Self {
        Self {
            lookup,
            max_credential_length: None,
        }
    }

    /// Creates an authenticator using the limits from `config`
    ///
    /// [`Config::validate`](crate::config::Config::validate) guarantees that no
    /// configured user exceeds the cap.
    pub fn from_config(lookup: Arc<L>, config: &AuthConfig) -> Self {
        Self {
            lookup,
            max_credential_length: config.max_credential_length,
        }
    }

    /// Rejects emails or passwords longer than `max_credential_length` bytes.
    ///
    /// Records in the store longer than the cap can no longer log in.
    pub fn with_max_credential_length(mut self, max_credential_length: usize) -> Self {
        self.max_credential_length = Some(max_credential_length);
        self
    }

    /// Authenticates an email and password, returning the display name on success.
    ///
    /// Whitespace is significant in both fields. Only the email is case-folded.
    pub async fn authenticate(&self, email: &str, password: &str) -> Option<String> {
        if email.is_empty() || password.is_empty() {
            debug!("Rejecting login with empty credentials");
            return None;
        }

        if let Some(limit) = self.max_credential_length {
            if email.len() > limit || password.len() > limit {
                debug!(
                    email_len = email.len(),
                    password_len = password.len(),
                    limit,
                    "Rejecting login with oversized credentials"
                );
                return None;
            }
        }

        let key = normalize_email(email);
        let record = match self.lookup.find_by_email(&key).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(email_len = email.len(), "No user record for email");
                return None;
            }
            Err(e) => {
                error!(error = %e, "User lookup failed");
                return None;
            }
        };

        if normalize_email(&record.email) != key {
            warn!(stored = %record.email, "User store returned a record for a different email");
            return None;
        }

        if !passwords_match(&record.password, password) {
            debug!(password_len = password.len(), "Password mismatch");
            return None;
        }

        info!(display_name = %record.display_name, "User authenticated");
        Some(record.display_name)
    }

    /// Same as [`authenticate`](Self::authenticate) for a [`Credentials`] pair
    pub async fn authenticate_credentials(&self, credentials: &Credentials) -> Option<String> {
        self.authenticate(&credentials.email, &credentials.password).await
    }
}

// Equal-length inputs are compared without early exit.
fn passwords_match(stored: &str, supplied: &str) -> bool {
    constant_time_eq::constant_time_eq(stored.as_bytes(), supplied.as_bytes())
}
