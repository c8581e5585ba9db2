//! Outbound adapters implementing the domain's driven ports.
//!
//! - **memory**: mutex-guarded in-memory stores, an in-memory mailer, and
//!   pinned clock/id fixtures. Test doubles and composition-root
//!   conveniences, not production storage.
//! - **system**: wall-clock time and random id generation for real
//!   composition roots.
//!
//! Adapters are thin translators; they contain no business logic.

pub mod memory;
pub mod system;
