//! Webinar data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// Smallest seat count the organize workflow accepts.
pub const WEBINAR_MIN_SEATS: u32 = 1;
/// Largest seat count the organize workflow accepts.
pub const WEBINAR_MAX_SEATS: u32 = 1000;

/// Validation errors returned by [`Webinar::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebinarValidationError {
    /// The webinar id was empty.
    EmptyId,
    /// The webinar id carried surrounding whitespace.
    UntrimmedId,
    /// The title was empty or whitespace-only.
    EmptyTitle,
    /// The end date did not fall after the start date.
    EndBeforeStart,
    /// The organizer id failed user id validation.
    InvalidOrganizerId(crate::domain::UserValidationError),
}

impl fmt::Display for WebinarValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "webinar id must not be empty"),
            Self::UntrimmedId => write!(f, "webinar id must not carry surrounding whitespace"),
            Self::EmptyTitle => write!(f, "webinar title must not be empty"),
            Self::EndBeforeStart => write!(f, "webinar end date must fall after its start date"),
            Self::InvalidOrganizerId(err) => write!(f, "organizer id invalid: {err}"),
        }
    }
}

impl std::error::Error for WebinarValidationError {}

/// Stable webinar identifier.
///
/// Opaque caller-supplied string, non-empty and free of surrounding
/// whitespace; the same shape as [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WebinarId(String);

impl WebinarId {
    /// Validate and construct a [`WebinarId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, WebinarValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    fn from_owned(id: String) -> Result<Self, WebinarValidationError> {
        if id.trim().is_empty() {
            return Err(WebinarValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(WebinarValidationError::UntrimmedId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for WebinarId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for WebinarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<WebinarId> for String {
    fn from(value: WebinarId) -> Self {
        value.0
    }
}

impl TryFrom<String> for WebinarId {
    type Error = WebinarValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Human readable webinar title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WebinarTitle(String);

impl WebinarTitle {
    /// Validate and construct a [`WebinarTitle`] from owned input.
    pub fn new(title: impl Into<String>) -> Result<Self, WebinarValidationError> {
        Self::from_owned(title.into())
    }

    fn from_owned(title: String) -> Result<Self, WebinarValidationError> {
        if title.trim().is_empty() {
            return Err(WebinarValidationError::EmptyTitle);
        }
        Ok(Self(title))
    }
}

impl AsRef<str> for WebinarTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for WebinarTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<WebinarTitle> for String {
    fn from(value: WebinarTitle) -> Self {
        value.0
    }
}

impl TryFrom<String> for WebinarTitle {
    type Error = WebinarValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Unvalidated webinar fields handed to [`Webinar::new`].
#[derive(Debug, Clone)]
pub struct WebinarDraft {
    /// Stable webinar identifier.
    pub id: WebinarId,
    /// Id of the user organising the webinar (weak reference, lookup only).
    pub organizer_id: UserId,
    /// Title shown to participants and quoted in notifications.
    pub title: WebinarTitle,
    /// Scheduled start.
    pub start_date: DateTime<Utc>,
    /// Scheduled end.
    pub end_date: DateTime<Utc>,
    /// Fixed seat capacity.
    pub seats: u32,
}

/// Scheduled online event with a fixed seat capacity.
///
/// ## Invariants
/// - `end_date` falls strictly after `start_date`.
/// - `seats` is the configured capacity; the booked count is tracked
///   externally through participation records, never on the webinar itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WebinarDto", into = "WebinarDto")]
pub struct Webinar {
    id: WebinarId,
    organizer_id: UserId,
    title: WebinarTitle,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    seats: u32,
}

impl Webinar {
    /// Build a new [`Webinar`] from a draft, enforcing the date invariant.
    pub fn new(draft: WebinarDraft) -> Result<Self, WebinarValidationError> {
        if draft.end_date <= draft.start_date {
            return Err(WebinarValidationError::EndBeforeStart);
        }

        Ok(Self {
            id: draft.id,
            organizer_id: draft.organizer_id,
            title: draft.title,
            start_date: draft.start_date,
            end_date: draft.end_date,
            seats: draft.seats,
        })
    }

    /// Stable webinar identifier.
    pub fn id(&self) -> &WebinarId {
        &self.id
    }

    /// Id of the organising user.
    pub fn organizer_id(&self) -> &UserId {
        &self.organizer_id
    }

    /// Title shown to participants.
    pub fn title(&self) -> &WebinarTitle {
        &self.title
    }

    /// Scheduled start.
    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// Scheduled end.
    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// Configured seat capacity.
    pub fn seats(&self) -> u32 {
        self.seats
    }

    /// Whether a booking would exceed capacity given the live booked count.
    ///
    /// Capacity is always computed against the caller-supplied count of
    /// existing participations; the entity caches nothing.
    pub fn is_full(&self, booked: usize) -> bool {
        booked as u64 >= u64::from(self.seats)
    }

    /// Seats still available given the live booked count.
    pub fn remaining_seats(&self, booked: usize) -> u64 {
        u64::from(self.seats).saturating_sub(booked as u64)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct WebinarDto {
    id: String,
    organizer_id: String,
    title: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    seats: u32,
}

impl From<Webinar> for WebinarDto {
    fn from(value: Webinar) -> Self {
        let Webinar {
            id,
            organizer_id,
            title,
            start_date,
            end_date,
            seats,
        } = value;
        Self {
            id: id.into(),
            organizer_id: organizer_id.into(),
            title: title.into(),
            start_date,
            end_date,
            seats,
        }
    }
}

impl TryFrom<WebinarDto> for Webinar {
    type Error = WebinarValidationError;

    fn try_from(value: WebinarDto) -> Result<Self, Self::Error> {
        let organizer_id =
            UserId::new(value.organizer_id).map_err(WebinarValidationError::InvalidOrganizerId)?;

        Webinar::new(WebinarDraft {
            id: WebinarId::new(value.id)?,
            organizer_id,
            title: WebinarTitle::new(value.title)?,
            start_date: value.start_date,
            end_date: value.end_date,
            seats: value.seats,
        })
    }
}
