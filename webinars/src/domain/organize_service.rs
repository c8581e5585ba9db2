//! Organize webinar workflow.
//!
//! Implements the [`OrganizeWebinarCommand`] driving port: validates
//! scheduling notice and seat bounds, mints a fresh identifier, and persists
//! the webinar through the webinar store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use serde_json::json;

use crate::domain::ports::{
    Clock, IdGenerator, OrganizeWebinarCommand, OrganizeWebinarRequest, OrganizeWebinarResponse,
    WebinarRepository, WebinarRepositoryError,
};
use crate::domain::webinar::{WEBINAR_MAX_SEATS, WEBINAR_MIN_SEATS};
use crate::domain::{Error, UserId, Webinar, WebinarDraft, WebinarId, WebinarTitle};

/// Days of advance notice a webinar must be scheduled with.
pub const MIN_SCHEDULING_NOTICE_DAYS: i64 = 3;

/// Organize webinar service implementing the driving port.
#[derive(Clone)]
pub struct OrganizeWebinarService<W, I, C> {
    webinars: Arc<W>,
    id_generator: Arc<I>,
    clock: Arc<C>,
}

impl<W, I, C> OrganizeWebinarService<W, I, C> {
    /// Create a new service with the injected collaborators.
    pub fn new(webinars: Arc<W>, id_generator: Arc<I>, clock: Arc<C>) -> Self {
        Self {
            webinars,
            id_generator,
            clock,
        }
    }
}

fn map_webinar_repository_error(error: WebinarRepositoryError) -> Error {
    match error {
        WebinarRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("webinar repository unavailable: {message}"))
        }
        WebinarRepositoryError::Query { message } => {
            Error::internal(format!("webinar repository error: {message}"))
        }
        // Generated ids never collide in practice; a hit means a broken
        // id-generator adapter, not a caller mistake.
        WebinarRepositoryError::Duplicate { message } => {
            Error::internal(format!("generated webinar id already taken: {message}"))
        }
    }
}

#[async_trait]
impl<W, I, C> OrganizeWebinarCommand for OrganizeWebinarService<W, I, C>
where
    W: WebinarRepository,
    I: IdGenerator,
    C: Clock,
{
    async fn organize_webinar(
        &self,
        request: OrganizeWebinarRequest,
    ) -> Result<OrganizeWebinarResponse, Error> {
        let now = self.clock.now();
        if request.start_date < now + Duration::days(MIN_SCHEDULING_NOTICE_DAYS) {
            return Err(Error::dates_too_soon(format!(
                "Webinar must be scheduled at least {MIN_SCHEDULING_NOTICE_DAYS} days in advance"
            )));
        }

        if request.seats < WEBINAR_MIN_SEATS {
            return Err(Error::not_enough_seats(
                "Webinar must have at least one seat",
            ));
        }
        if request.seats > WEBINAR_MAX_SEATS {
            return Err(
                Error::too_many_seats("Webinar must have at most 1000 seats").with_details(json!({
                    "seats": request.seats,
                    "max": WEBINAR_MAX_SEATS,
                })),
            );
        }

        let organizer_id = UserId::new(&request.organizer_id)
            .map_err(|err| Error::invalid_request(format!("invalid organize request: {err}")))?;
        let title = WebinarTitle::new(request.title)
            .map_err(|err| Error::invalid_request(format!("invalid organize request: {err}")))?;
        let webinar_id = WebinarId::new(self.id_generator.generate())
            .map_err(|err| Error::internal(format!("id generator produced an invalid id: {err}")))?;

        let webinar = Webinar::new(WebinarDraft {
            id: webinar_id.clone(),
            organizer_id,
            title,
            start_date: request.start_date,
            end_date: request.end_date,
            seats: request.seats,
        })
        .map_err(|err| Error::invalid_request(format!("invalid organize request: {err}")))?;

        self.webinars
            .create(&webinar)
            .await
            .map_err(map_webinar_repository_error)?;

        tracing::info!(
            webinar = %webinar_id,
            organizer = %webinar.organizer_id(),
            seats = webinar.seats(),
            "webinar organized"
        );

        Ok(OrganizeWebinarResponse {
            webinar_id: webinar_id.into(),
        })
    }
}

#[cfg(test)]
#[path = "organize_service_tests.rs"]
mod tests;
