//! Login Service Library
//!
//! This library resolves an email and password to a user's display name.
//! Email matching is case-insensitive, passwords are compared exactly, and
//! every kind of failure collapses into `None`.
//!
//! # Modules
//! - `auth`: Credentials and the authenticator
//! - `db`: User lookup trait and the in-memory user store
//! - `config`: Configuration management
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use login_app::{
//!     auth::Authenticator,
//!     config::Config,
//!     db::memory::InMemoryUserStore,
//! };
//!
//! async fn login(email: &str, password: &str) -> Option<String> {
//!     let config = Config::new().expect("Failed to load configuration");
//!     let store = InMemoryUserStore::from_records(config.users.clone());
//!     let authenticator = Authenticator::from_config(Arc::new(store), config.auth());
//!     authenticator.authenticate(email, password).await
//! }
//! ```

pub mod auth;
pub mod config;
pub mod db;
