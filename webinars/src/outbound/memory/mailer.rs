//! In-memory `Mailer` implementation.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::Email;
use crate::domain::ports::{Mailer, MailerError};

/// Mailer that records every dispatched email instead of sending it.
///
/// A malformed payload cannot reach this adapter: [`Email`] validates its
/// recipient, subject, and body at construction, so `send` only ever fails
/// when the store itself is unusable.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMailer {
    sent: Arc<Mutex<Vec<Email>>>,
}

impl InMemoryMailer {
    /// Create an empty mailer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every dispatched email, in dispatch order.
    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }

    /// Number of dispatched emails.
    pub fn sent_count(&self) -> usize {
        self.sent.lock().map(|sent| sent.len()).unwrap_or(0)
    }
}

#[async_trait]
impl Mailer for InMemoryMailer {
    async fn send(&self, email: &Email) -> Result<(), MailerError> {
        let mut sent = self
            .sent
            .lock()
            .map_err(|_| MailerError::transport("mailer mutex poisoned"))?;
        sent.push(email.clone());
        Ok(())
    }
}
