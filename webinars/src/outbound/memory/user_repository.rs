//! In-memory `UserRepository` implementation.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

/// Mutex-guarded in-memory user store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    records: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given users.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            records: Arc::new(Mutex::new(users.into_iter().collect())),
        }
    }

    /// Add a user to the store.
    pub fn insert(&self, user: User) {
        if let Ok(mut records) = self.records.lock() {
            records.push(user);
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let records = self
            .records
            .lock()
            .map_err(|_| UserRepositoryError::query("user store mutex poisoned"))?;
        Ok(records.iter().find(|user| user.id() == id).cloned())
    }
}
