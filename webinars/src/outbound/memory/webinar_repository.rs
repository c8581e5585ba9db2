//! In-memory `WebinarRepository` implementation.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::ports::{WebinarRepository, WebinarRepositoryError};
use crate::domain::{Webinar, WebinarId};

/// Mutex-guarded in-memory webinar store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWebinarRepository {
    records: Arc<Mutex<Vec<Webinar>>>,
}

impl InMemoryWebinarRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given webinars.
    pub fn with_webinars(webinars: impl IntoIterator<Item = Webinar>) -> Self {
        Self {
            records: Arc::new(Mutex::new(webinars.into_iter().collect())),
        }
    }

    /// Number of stored webinars.
    pub fn count(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }
}

#[async_trait]
impl WebinarRepository for InMemoryWebinarRepository {
    async fn create(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| WebinarRepositoryError::query("webinar store mutex poisoned"))?;
        if records.iter().any(|existing| existing.id() == webinar.id()) {
            return Err(WebinarRepositoryError::duplicate(webinar.id().as_ref()));
        }
        records.push(webinar.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, WebinarRepositoryError> {
        let records = self
            .records
            .lock()
            .map_err(|_| WebinarRepositoryError::query("webinar store mutex poisoned"))?;
        Ok(records.iter().find(|webinar| webinar.id() == id).cloned())
    }
}
