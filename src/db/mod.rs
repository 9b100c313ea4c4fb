//! User record storage.
//!
//! The authenticator never talks to a concrete store. It consults a
//! [`UserLookup`] implementation handed to it at construction time, so any
//! backing store (in-memory map, database, directory) can be substituted.
//!
//! @author Joseph G Noonan
//! @copyright 2025

pub mod memory;

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// A stored identity entry consulted during authentication.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    /// Email address as stored
    pub email: String,
    /// Password compared exactly against the supplied one
    pub password: String,
    /// Human-readable name returned on a successful login
    pub display_name: String,
}

impl UserRecord {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            display_name: display_name.into(),
        }
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}

/// Error types for user store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("User store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only lookup of user records by normalized email.
///
/// Implementations must treat the email as a literal key. It is never
/// spliced into a query.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait UserLookup: Send + Sync {
    /// Returns the record whose normalized email equals `normalized_email`.
    async fn find_by_email(&self, normalized_email: &str) -> Result<Option<UserRecord>, StoreError>;
}
