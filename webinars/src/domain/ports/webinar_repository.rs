//! Port for webinar lookups and creation.

use async_trait::async_trait;

use crate::domain::{Webinar, WebinarId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by webinar repository adapters.
    pub enum WebinarRepositoryError {
        /// Repository connection could not be established.
        Connection => "webinar repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "webinar repository query failed: {message}",
        /// A webinar with the same id already exists.
        Duplicate => "webinar already exists: {message}",
    }
}

/// Port for reading webinars by id and persisting new ones.
///
/// The booking workflow only reads; `create` belongs to the organize
/// workflow.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebinarRepository: Send + Sync {
    /// Persist a new webinar, failing `Duplicate` when the id is taken.
    async fn create(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError>;

    /// Find a webinar by id, returning `None` when the id does not resolve.
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, WebinarRepositoryError>;
}
