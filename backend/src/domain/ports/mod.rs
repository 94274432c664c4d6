//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`EventCommand`], [`EventQuery`]) are what inbound adapters
//! call; the driven port ([`EventRepository`]) is what storage adapters
//! implement. Each port exposes typed errors so adapters map their failures
//! into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod event_command;
mod event_query;
mod event_repository;

#[cfg(test)]
pub use event_command::MockEventCommand;
pub use event_command::{CreateEventPayload, EventCommand, UpdateEventPayload};
#[cfg(test)]
pub use event_query::MockEventQuery;
pub use event_query::EventQuery;
#[cfg(test)]
pub use event_repository::MockEventRepository;
pub use event_repository::{EventRepository, EventRepositoryError};
