//! System-backed clock and id generation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::ports::{Clock, IdGenerator};

/// Wall-clock [`Clock`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random, collision-free [`IdGenerator`] backed by UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    /// Create a new generator.
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let generator = UuidIdGenerator::new();
        assert_ne!(generator.generate(), generator.generate());
    }

    #[test]
    fn generated_ids_satisfy_webinar_id_validation() {
        let generator = UuidIdGenerator::new();
        assert!(crate::domain::WebinarId::new(generator.generate()).is_ok());
    }
}
