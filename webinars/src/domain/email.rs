//! Email value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::EmailAddress;

/// Validation errors returned by [`Email::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    /// The subject was empty or whitespace-only.
    EmptySubject,
    /// The body was empty or whitespace-only.
    EmptyBody,
}

impl fmt::Display for EmailValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySubject => write!(f, "email subject must not be empty"),
            Self::EmptyBody => write!(f, "email body must not be empty"),
        }
    }
}

impl std::error::Error for EmailValidationError {}

/// Transient notification payload handed to the mailer.
///
/// Constructed immediately before dispatch and never persisted. The recipient
/// is an already-validated [`EmailAddress`], so a malformed payload cannot
/// reach a conforming mailer through this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Email {
    to: EmailAddress,
    subject: String,
    body: String,
}

impl Email {
    /// Build a new [`Email`], rejecting blank subjects and bodies.
    pub fn try_new(
        to: EmailAddress,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, EmailValidationError> {
        let subject = subject.into();
        if subject.trim().is_empty() {
            return Err(EmailValidationError::EmptySubject);
        }
        let body = body.into();
        if body.trim().is_empty() {
            return Err(EmailValidationError::EmptyBody);
        }
        Ok(Self { to, subject, body })
    }

    /// Recipient address.
    pub fn to(&self) -> &EmailAddress {
        &self.to
    }

    /// Subject line.
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Plain-text body.
    pub fn body(&self) -> &str {
        self.body.as_str()
    }
}
