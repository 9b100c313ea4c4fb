//! In-memory user store.
//!
//! Holds user records in a `HashMap` keyed by normalized email. The store is
//! filled once (from configuration or test fixtures) and then only read, so a
//! single instance can be shared behind an `Arc` by any number of callers.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::{StoreError, UserLookup, UserRecord};
use crate::auth::credentials::normalize_email;

#[derive(Debug, Default, Clone)]
pub struct InMemoryUserStore {
    users: HashMap<String, UserRecord>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a list of records.
    ///
    /// Records are keyed by normalized email. When two records share a key the
    /// later one wins.
    pub fn from_records(records: impl IntoIterator<Item = UserRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        debug!(users = store.len(), "Built in-memory user store");
        store
    }

    /// Demo fixture with two known users.
    pub fn sample() -> Self {
        Self::from_records([
            UserRecord::new("johndoe@example.com", "password123", "John Doe"),
            UserRecord::new("janesmith@example.com", "securepass456", "Jane Smith"),
        ])
    }

    /// Adds a record, replacing any record with the same normalized email.
    pub fn insert(&mut self, record: UserRecord) {
        let key = normalize_email(&record.email);
        if let Some(previous) = self.users.insert(key, record) {
            warn!(email = %previous.email, "Replaced duplicate user record");
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait::async_trait]
impl UserLookup for InMemoryUserStore {
    async fn find_by_email(&self, normalized_email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.get(normalized_email).cloned())
    }
}
