//! Login credentials and email normalization.

use std::fmt;

/// The (email, password) pair supplied for one authentication attempt.
///
/// No validation happens on construction; the authenticator decides what is
/// acceptable.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Case-folds an email for use as a lookup key.
///
/// Whitespace is left untouched: `" a@b.c "` and `"a@b.c"` are different keys.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}
