//! Driving port for event reads.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Error, EventId, EventResponse};

/// Driving port for event read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventQuery: Send + Sync {
    /// One page of events in creation order.
    async fn list_events(&self, request: PageRequest) -> Result<Page<EventResponse>, Error>;

    /// A single event. `Ok(None)` is the normal result for an unknown id.
    async fn get_event(&self, id: EventId) -> Result<Option<EventResponse>, Error>;
}
