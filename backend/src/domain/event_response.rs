//! Read-only projection of a stored event.

use chrono::NaiveDateTime;

use super::{Event, EventId};

/// Field copy of an [`Event`] handed to inbound adapters.
///
/// Hypermedia links are added by the adapter; the projection itself carries
/// only data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventResponse {
    /// Stable identifier.
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Interval start.
    pub start: NaiveDateTime,
    /// Interval end.
    pub end: NaiveDateTime,
}

impl From<Event> for EventResponse {
    fn from(value: Event) -> Self {
        Self {
            id: value.id(),
            title: value.title().as_str().to_owned(),
            start: value.start(),
            end: value.end(),
        }
    }
}
