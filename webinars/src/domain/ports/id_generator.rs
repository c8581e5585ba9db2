//! Port for generating fresh identifiers.

/// Port for producing a fresh opaque identifier string.
///
/// Kept synchronous: generation never performs I/O in any conforming
/// implementation.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh identifier.
    fn generate(&self) -> String;
}
