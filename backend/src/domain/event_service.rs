//! Event domain service.
//!
//! The service is the only writer of event state. It validates payloads,
//! delegates storage to an [`EventRepository`] and projects stored events into
//! [`EventResponse`] values. It holds no mutable state of its own.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use tracing::debug;

use crate::domain::ports::{
    CreateEventPayload, EventCommand, EventQuery, EventRepository, EventRepositoryError,
    UpdateEventPayload,
};
use crate::domain::{
    Error, EventCreationRequest, EventId, EventResponse, EventUpdateRequest, EventValidationError,
};

fn map_repository_error(error: EventRepositoryError) -> Error {
    match error {
        EventRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("event repository unavailable: {message}"))
        }
        EventRepositoryError::Query { message } => {
            Error::internal(format!("event repository error: {message}"))
        }
    }
}

fn reject(error: EventValidationError) -> Error {
    debug!(code = error.code(), field = error.field(), %error, "event request rejected");
    Error::from(error)
}

/// Event service implementing the command and query driving ports.
#[derive(Clone)]
pub struct EventService<R> {
    events: Arc<R>,
}

impl<R> EventService<R> {
    /// Create a service backed by the given repository.
    pub fn new(events: Arc<R>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl<R> EventCommand for EventService<R>
where
    R: EventRepository,
{
    async fn create_event(&self, payload: CreateEventPayload) -> Result<EventResponse, Error> {
        let request = EventCreationRequest::try_from(payload).map_err(reject)?;

        let event = self
            .events
            .insert(request.draft())
            .await
            .map_err(map_repository_error)?;

        debug!(event_id = %event.id(), "event created");
        Ok(EventResponse::from(event))
    }

    async fn update_event(
        &self,
        id: EventId,
        payload: UpdateEventPayload,
    ) -> Result<Option<EventResponse>, Error> {
        let patch = EventUpdateRequest::try_from(payload).map_err(reject)?;

        let Some(mut event) = self
            .events
            .find_by_id(&id)
            .await
            .map_err(map_repository_error)?
        else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(EventResponse::from(event)));
        }

        event.apply(patch);
        let stored = self
            .events
            .update(&event)
            .await
            .map_err(map_repository_error)?;

        Ok(stored.then(|| EventResponse::from(event)))
    }

    async fn delete_event(&self, id: EventId) -> Result<(), Error> {
        let removed = self
            .events
            .delete_by_id(&id)
            .await
            .map_err(map_repository_error)?;

        debug!(event_id = %id, removed, "event delete processed");
        Ok(())
    }
}

#[async_trait]
impl<R> EventQuery for EventService<R>
where
    R: EventRepository,
{
    async fn list_events(&self, request: PageRequest) -> Result<Page<EventResponse>, Error> {
        let page = self
            .events
            .find_page(request)
            .await
            .map_err(map_repository_error)?;

        Ok(page.map(EventResponse::from))
    }

    async fn get_event(&self, id: EventId) -> Result<Option<EventResponse>, Error> {
        let event = self
            .events
            .find_by_id(&id)
            .await
            .map_err(map_repository_error)?;

        Ok(event.map(EventResponse::from))
    }
}

#[cfg(test)]
#[path = "event_service_tests.rs"]
mod tests;
