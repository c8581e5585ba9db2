//! In-memory adapters for tests and composition roots.
//!
//! Records live in a mutex-guarded `Vec` with linear search, matching the
//! scale these doubles are used at. Cloning an adapter shares the underlying
//! store, so a test can keep a handle for inspection while the service owns
//! another.

mod fixtures;
mod mailer;
mod participation_repository;
mod user_repository;
mod webinar_repository;

pub use fixtures::{FixedClock, SequentialIdGenerator};
pub use mailer::InMemoryMailer;
pub use participation_repository::InMemoryParticipationRepository;
pub use user_repository::InMemoryUserRepository;
pub use webinar_repository::InMemoryWebinarRepository;
