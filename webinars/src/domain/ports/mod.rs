//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod book_seat_command;
mod clock;
mod id_generator;
mod mailer;
mod organize_webinar_command;
mod participation_repository;
mod user_repository;
mod webinar_repository;

#[cfg(test)]
pub use book_seat_command::MockBookSeatCommand;
pub use book_seat_command::{BookSeatCommand, BookSeatRequest, UserPayload};
#[cfg(test)]
pub use clock::MockClock;
pub use clock::Clock;
#[cfg(test)]
pub use id_generator::MockIdGenerator;
pub use id_generator::IdGenerator;
#[cfg(test)]
pub use mailer::MockMailer;
pub use mailer::{Mailer, MailerError};
#[cfg(test)]
pub use organize_webinar_command::MockOrganizeWebinarCommand;
pub use organize_webinar_command::{
    OrganizeWebinarCommand, OrganizeWebinarRequest, OrganizeWebinarResponse,
};
#[cfg(test)]
pub use participation_repository::MockParticipationRepository;
pub use participation_repository::{ParticipationRepository, ParticipationRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use webinar_repository::MockWebinarRepository;
pub use webinar_repository::{WebinarRepository, WebinarRepositoryError};
