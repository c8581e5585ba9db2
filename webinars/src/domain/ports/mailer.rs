//! Port for dispatching notification emails.

use async_trait::async_trait;

use crate::domain::Email;

use super::define_port_error;

define_port_error! {
    /// Errors raised by mailer adapters.
    pub enum MailerError {
        /// The mailer rejected the payload itself.
        Rejected => "mailer rejected the email: {message}",
        /// The mail infrastructure could not be reached.
        Transport => "mailer transport failed: {message}",
    }
}

/// Port for sending a single email.
///
/// Dispatch is fire-and-forget from the workflow's point of view: a failure
/// propagates to the caller but is never retried here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Dispatch the email.
    async fn send(&self, email: &Email) -> Result<(), MailerError>;
}
