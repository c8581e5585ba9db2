//! Port for user lookups.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection => "user repository connection failed: {message}",
        /// Query failed during execution.
        Query => "user repository query failed: {message}",
    }
}

/// Port for reading users by id.
///
/// The booking workflow uses this only to resolve a webinar's organizer; it
/// never writes users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id, returning `None` when the id does not resolve.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;
}
