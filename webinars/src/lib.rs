//! Webinar seat booking core.
//!
//! The crate is organised along a hexagonal boundary: `domain` holds the
//! entities, the port traits, and the workflow services; `outbound` holds the
//! adapters that fulfil the driven ports (in-memory stores for tests and
//! composition roots, system clock and id generation for everything else).
//! No transport layer lives here; whichever inbound adapter invokes the
//! driving ports owns that concern.

pub mod domain;
pub mod outbound;

pub use domain::{DomainResult, Error, ErrorCode};
