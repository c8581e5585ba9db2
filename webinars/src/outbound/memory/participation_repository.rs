//! In-memory `ParticipationRepository` implementation.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::ports::{ParticipationRepository, ParticipationRepositoryError};
use crate::domain::{Participation, WebinarId};

/// Mutex-guarded in-memory participation store.
///
/// `save` is conditional, as the port contract requires: duplicate
/// `(user, webinar)` pairs are rejected while the lock is held, so the
/// compound-key uniqueness invariant holds even under concurrent bookings.
#[derive(Debug, Clone, Default)]
pub struct InMemoryParticipationRepository {
    records: Arc<Mutex<Vec<Participation>>>,
}

impl InMemoryParticipationRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored participation.
    pub fn records(&self) -> Vec<Participation> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Number of stored participations.
    pub fn count(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }
}

#[async_trait]
impl ParticipationRepository for InMemoryParticipationRepository {
    async fn find_by_webinar_id(
        &self,
        webinar_id: &WebinarId,
    ) -> Result<Vec<Participation>, ParticipationRepositoryError> {
        let records = self
            .records
            .lock()
            .map_err(|_| ParticipationRepositoryError::query("participation store mutex poisoned"))?;
        Ok(records
            .iter()
            .filter(|participation| participation.books_seat_in(webinar_id))
            .cloned()
            .collect())
    }

    async fn save(
        &self,
        participation: &Participation,
    ) -> Result<(), ParticipationRepositoryError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| ParticipationRepositoryError::query("participation store mutex poisoned"))?;
        if records.iter().any(|existing| existing == participation) {
            return Err(ParticipationRepositoryError::duplicate(format!(
                "{}/{}",
                participation.user_id(),
                participation.webinar_id()
            )));
        }
        records.push(participation.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::UserId;

    fn participation(user_id: &str, webinar_id: &str) -> Participation {
        Participation::new(
            UserId::new(user_id).expect("valid id"),
            WebinarId::new(webinar_id).expect("valid id"),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn save_then_find_filters_by_webinar() {
        let repo = InMemoryParticipationRepository::new();
        repo.save(&participation("user-1", "webinar-1"))
            .await
            .expect("save succeeds");
        repo.save(&participation("user-1", "webinar-2"))
            .await
            .expect("save succeeds");

        let found = repo
            .find_by_webinar_id(&WebinarId::new("webinar-1").expect("valid id"))
            .await
            .expect("lookup succeeds");

        assert_eq!(found, vec![participation("user-1", "webinar-1")]);
    }

    #[rstest]
    #[tokio::test]
    async fn save_rejects_a_duplicate_pair() {
        let repo = InMemoryParticipationRepository::new();
        let record = participation("user-1", "webinar-1");

        repo.save(&record).await.expect("first save succeeds");
        let err = repo.save(&record).await.expect_err("second save fails");

        assert!(matches!(
            err,
            ParticipationRepositoryError::Duplicate { .. }
        ));
        assert_eq!(repo.count(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn the_same_user_may_book_different_webinars() {
        let repo = InMemoryParticipationRepository::new();

        repo.save(&participation("user-1", "webinar-1"))
            .await
            .expect("save succeeds");
        repo.save(&participation("user-1", "webinar-2"))
            .await
            .expect("save succeeds");

        assert_eq!(repo.count(), 2);
    }
}
