//! Authentication module.
//!
//! This module provides email and password authentication against a
//! pluggable user store.
//!
//! @author Joseph G Noonan
//! @copyright 2025

pub mod authenticator;
pub mod credentials;

pub use authenticator::Authenticator;
pub use credentials::{normalize_email, Credentials};
