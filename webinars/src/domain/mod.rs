//! Domain entities, ports, and workflow services.
//!
//! Purpose: hold the logic-bearing core of the webinar booking system behind
//! a hexagonal boundary. Entities are immutable and validated at
//! construction; every collaborator the workflows touch is a port trait in
//! [`ports`]; the services implement the driving ports and own no mutable
//! state themselves.
//!
//! Public surface:
//! - `Error` / `ErrorCode` — closed failure taxonomy callers match on.
//! - `User`, `Webinar`, `Participation`, `Email` — validated entities.
//! - `BookingService` — the seat booking workflow.
//! - `OrganizeWebinarService` — the organizer-facing creation workflow.

pub mod booking_service;
pub mod email;
pub mod error;
pub mod organize_service;
pub mod participation;
pub mod ports;
pub mod user;
pub mod webinar;

pub use self::booking_service::BookingService;
pub use self::email::{Email, EmailValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::organize_service::{MIN_SCHEDULING_NOTICE_DAYS, OrganizeWebinarService};
pub use self::participation::Participation;
pub use self::user::{EmailAddress, Password, User, UserId, UserValidationError};
pub use self::webinar::{
    WEBINAR_MAX_SEATS, WEBINAR_MIN_SEATS, Webinar, WebinarDraft, WebinarId, WebinarTitle,
    WebinarValidationError,
};

/// Convenient result alias for workflow callers.
///
/// # Examples
/// ```
/// use webinars::domain::{DomainResult, Error};
///
/// fn handler() -> DomainResult<()> {
///     Err(Error::not_found("Webinar not found"))
/// }
/// ```
pub type DomainResult<T> = Result<T, Error>;
