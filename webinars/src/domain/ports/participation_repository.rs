//! Port for participation reads and the single booking write.

use async_trait::async_trait;

use crate::domain::{Participation, WebinarId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by participation repository adapters.
    pub enum ParticipationRepositoryError {
        /// Repository connection could not be established.
        Connection => "participation repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "participation repository query failed: {message}",
        /// A participation for the same `(user, webinar)` pair already exists.
        Duplicate => "participation already exists: {message}",
    }
}

/// Port for reading a webinar's participations and saving new ones.
///
/// `save` is conditional: adapters must reject a second record for the same
/// `(user, webinar)` pair with [`ParticipationRepositoryError::Duplicate`].
/// That contract upholds the compound-key uniqueness invariant even when two
/// concurrent bookings pass the workflow's duplicate check before either
/// saves.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipationRepository: Send + Sync {
    /// All participations for the webinar, in no particular order.
    async fn find_by_webinar_id(
        &self,
        webinar_id: &WebinarId,
    ) -> Result<Vec<Participation>, ParticipationRepositoryError>;

    /// Persist a participation, failing `Duplicate` when the pair exists.
    async fn save(
        &self,
        participation: &Participation,
    ) -> Result<(), ParticipationRepositoryError>;
}
