//! Driving port for event mutations.
//!
//! Payloads carry raw, already-decoded inputs; the service validates them
//! into [`EventCreationRequest`] and [`EventUpdateRequest`] values.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::{
    Error, EventCreationRequest, EventId, EventResponse, EventUpdateRequest, EventValidationError,
};

/// Decoded inputs for creating an event. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateEventPayload {
    pub title: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

/// Decoded inputs for patching an event. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateEventPayload {
    pub title: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl TryFrom<CreateEventPayload> for EventCreationRequest {
    type Error = EventValidationError;

    fn try_from(value: CreateEventPayload) -> Result<Self, Self::Error> {
        Self::new(value.title, value.start, value.end)
    }
}

impl TryFrom<UpdateEventPayload> for EventUpdateRequest {
    type Error = EventValidationError;

    fn try_from(value: UpdateEventPayload) -> Result<Self, Self::Error> {
        Self::new(value.title, value.start, value.end)
    }
}

/// Driving port for event write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventCommand: Send + Sync {
    /// Validate and store a new event, returning its projection.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use events_api::domain::EventService;
    /// # use events_api::domain::ports::{CreateEventPayload, EventCommand};
    /// # use events_api::outbound::memory::InMemoryEventRepository;
    /// # async fn example() -> Result<(), events_api::domain::Error> {
    /// let service = EventService::new(Arc::new(InMemoryEventRepository::default()));
    /// let created = service
    ///     .create_event(CreateEventPayload {
    ///         title: Some("Some event".to_owned()),
    ///         start: Some("2001-01-01T00:00:00".parse().expect("timestamp")),
    ///         end: Some("2001-01-01T12:00:00".parse().expect("timestamp")),
    ///     })
    ///     .await?;
    /// assert_eq!(created.title, "Some event");
    /// # Ok(())
    /// # }
    /// ```
    async fn create_event(&self, payload: CreateEventPayload) -> Result<EventResponse, Error>;

    /// Apply a sparse patch. `Ok(None)` when no event has the id.
    async fn update_event(
        &self,
        id: EventId,
        payload: UpdateEventPayload,
    ) -> Result<Option<EventResponse>, Error>;

    /// Remove an event. Unknown ids are treated as already deleted.
    async fn delete_event(&self, id: EventId) -> Result<(), Error>;
}
