//! Domain primitives, aggregates and services.
//!
//! Purpose: Define the event lifecycle rules independently of transport and
//! storage. Types are immutable outside the service layer and document their
//! invariants in Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Event, EventDraft, EventId, EventTitle: the persisted record and its
//!   validated parts.
//! - EventCreationRequest, EventUpdateRequest: validated write inputs.
//! - EventResponse: read-only projection returned by the service.
//! - EventService: implementation of the event driving ports.

pub mod error;
pub mod event;
pub mod event_requests;
pub mod event_response;
pub mod event_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::event::{Event, EventDraft, EventId, EventTitle, EventValidationError, TITLE_MAX};
pub use self::event_requests::{EventCreationRequest, EventUpdateRequest};
pub use self::event_response::EventResponse;
pub use self::event_service::EventService;
pub use self::trace_id::TraceId;

/// Convenient domain result alias.
///
/// # Examples
/// ```
/// use events_api::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<()> {
///     Err(Error::not_found("missing"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
