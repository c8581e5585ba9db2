//! Driving port for booking a seat in a webinar.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, User, UserValidationError};

/// Raw requester payload carried by [`BookSeatRequest`].
///
/// Fields stay unvalidated strings so the workflow's identity check can
/// observe a missing id and reject the malformed caller itself, rather than
/// the deserialisation layer doing it first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    /// Requester id; empty means a malformed caller.
    pub id: String,
    /// Requester email address.
    pub email: String,
    /// Opaque credential material.
    pub password: String,
}

impl TryFrom<UserPayload> for User {
    type Error = UserValidationError;

    fn try_from(value: UserPayload) -> Result<Self, Self::Error> {
        User::try_from_strings(value.id, value.email, value.password)
    }
}

impl From<User> for UserPayload {
    fn from(value: User) -> Self {
        Self {
            id: value.id().to_string(),
            email: value.email().to_string(),
            password: value.password().expose().to_owned(),
        }
    }
}

/// Request to book one seat for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSeatRequest {
    /// Target webinar id.
    pub webinar_id: String,
    /// Requesting user.
    pub user: UserPayload,
}

/// Driving port for the seat booking workflow.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookSeatCommand: Send + Sync {
    /// Book a seat, or fail with one of the closed error kinds.
    ///
    /// Success is silent: exactly one participation has been persisted and
    /// exactly one organizer notification dispatched. Callers distinguish
    /// failures by [`Error::code`].
    async fn book_seat(&self, request: BookSeatRequest) -> Result<(), Error>;
}
