//! Seat booking workflow.
//!
//! Implements the [`BookSeatCommand`] driving port: a single sequential
//! validation-and-side-effect flow that consults the user, webinar, and
//! participation stores, commits exactly one participation, and notifies the
//! webinar's organizer.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::ports::{
    BookSeatCommand, BookSeatRequest, Mailer, MailerError, ParticipationRepository,
    ParticipationRepositoryError, UserRepository, UserRepositoryError, WebinarRepository,
    WebinarRepositoryError,
};
use crate::domain::{Email, Error, Participation, User, Webinar, WebinarId};

/// Seat booking service implementing the driving port.
#[derive(Clone)]
pub struct BookingService<U, W, P, M> {
    users: Arc<U>,
    webinars: Arc<W>,
    participations: Arc<P>,
    mailer: Arc<M>,
}

impl<U, W, P, M> BookingService<U, W, P, M> {
    /// Create a new service with the injected collaborators.
    pub fn new(users: Arc<U>, webinars: Arc<W>, participations: Arc<P>, mailer: Arc<M>) -> Self {
        Self {
            users,
            webinars,
            participations,
            mailer,
        }
    }
}

fn map_user_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_webinar_repository_error(error: WebinarRepositoryError) -> Error {
    match error {
        WebinarRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("webinar repository unavailable: {message}"))
        }
        WebinarRepositoryError::Query { message } | WebinarRepositoryError::Duplicate { message } => {
            Error::internal(format!("webinar repository error: {message}"))
        }
    }
}

fn map_participation_repository_error(error: ParticipationRepositoryError) -> Error {
    match error {
        ParticipationRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("participation repository unavailable: {message}"))
        }
        ParticipationRepositoryError::Query { message } => {
            Error::internal(format!("participation repository error: {message}"))
        }
        // Lost the save race against a concurrent booking for the same pair.
        ParticipationRepositoryError::Duplicate { .. } => {
            Error::already_participating("User is already participating to this webinar")
        }
    }
}

fn map_mailer_error(error: MailerError) -> Error {
    match error {
        MailerError::Rejected { message } => {
            Error::mailer_failure(format!("organizer notification rejected: {message}"))
        }
        MailerError::Transport { message } => {
            Error::service_unavailable(format!("mailer unavailable: {message}"))
        }
    }
}

impl<U, W, P, M> BookingService<U, W, P, M>
where
    U: UserRepository,
    W: WebinarRepository,
    P: ParticipationRepository,
    M: Mailer,
{
    async fn notify_organizer(&self, webinar: &Webinar) -> Result<(), Error> {
        let organizer = self
            .users
            .find_by_id(webinar.organizer_id())
            .await
            .map_err(map_user_repository_error)?
            .ok_or_else(|| {
                tracing::warn!(
                    webinar = %webinar.id(),
                    organizer = %webinar.organizer_id(),
                    "booking committed but organizer could not be resolved"
                );
                Error::not_found("Organizer not found")
            })?;

        let email = Email::try_new(
            organizer.email().clone(),
            "New participant",
            format!(
                "A new participant has booked a seat for your webinar {}.",
                webinar.title()
            ),
        )
        .map_err(|err| Error::mailer_failure(format!("notification payload invalid: {err}")))?;

        self.mailer.send(&email).await.map_err(|err| {
            tracing::warn!(
                webinar = %webinar.id(),
                organizer = %webinar.organizer_id(),
                error = %err,
                "booking committed but organizer notification failed"
            );
            map_mailer_error(err)
        })
    }
}

#[async_trait]
impl<U, W, P, M> BookSeatCommand for BookingService<U, W, P, M>
where
    U: UserRepository,
    W: WebinarRepository,
    P: ParticipationRepository,
    M: Mailer,
{
    async fn book_seat(&self, request: BookSeatRequest) -> Result<(), Error> {
        // Step 1: the requester must carry an identifiable id. This guards
        // against a malformed caller, not a missing domain user.
        if request.user.id.trim().is_empty() {
            return Err(Error::invalid_request("User not found"));
        }
        let user = User::try_from(request.user)
            .map_err(|err| Error::invalid_request(format!("invalid booking request: {err}")))?;
        let webinar_id = WebinarId::new(&request.webinar_id)
            .map_err(|err| Error::invalid_request(format!("invalid booking request: {err}")))?;

        // Step 2: webinar lookup.
        let webinar = self
            .webinars
            .find_by_id(&webinar_id)
            .await
            .map_err(map_webinar_repository_error)?
            .ok_or_else(|| Error::not_found("Webinar not found"))?;

        // Steps 3 and 4 both read the live participation list, fetched once.
        let participations = self
            .participations
            .find_by_webinar_id(&webinar_id)
            .await
            .map_err(map_participation_repository_error)?;

        // Step 3: capacity, computed against the live booked count.
        if webinar.is_full(participations.len()) {
            return Err(
                Error::not_enough_seats("Webinar has not enough seats").with_details(json!({
                    "seats": webinar.seats(),
                    "booked": participations.len(),
                })),
            );
        }

        // Step 4: duplicate booking.
        if participations
            .iter()
            .any(|participation| participation.belongs_to(user.id()))
        {
            return Err(Error::already_participating(
                "User is already participating to this webinar",
            ));
        }

        // Step 5: commit. The only state-mutating step; once the save
        // returns, the booking is final and nothing below rolls it back.
        let participation = Participation::new(user.id().clone(), webinar_id.clone());
        self.participations
            .save(&participation)
            .await
            .map_err(map_participation_repository_error)?;

        tracing::info!(
            user = %user.id(),
            webinar = %webinar_id,
            remaining = webinar.remaining_seats(participations.len() + 1),
            "seat booked"
        );

        // Steps 6 and 7: resolve the organizer and dispatch the notification.
        self.notify_organizer(&webinar).await
    }
}

#[cfg(test)]
#[path = "booking_service_tests.rs"]
mod tests;
