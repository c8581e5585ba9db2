//! Port for reading the current time.

use chrono::{DateTime, Utc};

/// Port for the current UTC timestamp.
///
/// The organize workflow compares webinar start dates against this clock so
/// tests can pin time precisely.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}
