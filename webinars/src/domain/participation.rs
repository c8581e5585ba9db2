//! Participation data model.

use serde::{Deserialize, Serialize};

use crate::domain::{UserId, WebinarId};

/// Durable record that one user has reserved a seat in one webinar.
///
/// ## Invariants
/// - The `(user_id, webinar_id)` pair is the compound key: at most one
///   participation exists per pair. The participation store's `save` enforces
///   this; the record itself is never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Participation {
    user_id: UserId,
    webinar_id: WebinarId,
}

impl Participation {
    /// Build a new [`Participation`] from validated identifiers.
    pub fn new(user_id: UserId, webinar_id: WebinarId) -> Self {
        Self {
            user_id,
            webinar_id,
        }
    }

    /// Id of the participating user.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Id of the webinar the seat belongs to.
    pub fn webinar_id(&self) -> &WebinarId {
        &self.webinar_id
    }

    /// Whether this record belongs to the given user.
    pub fn belongs_to(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Whether this record books a seat in the given webinar.
    pub fn books_seat_in(&self, webinar_id: &WebinarId) -> bool {
        &self.webinar_id == webinar_id
    }
}
