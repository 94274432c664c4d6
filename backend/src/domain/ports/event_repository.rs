//! Driven port for event persistence adapters and their errors.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Event, EventDraft, EventId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by event repository adapters.
    pub enum EventRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "event repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "event repository query failed: {message}",
    }
}

/// Storage for events.
///
/// `insert` and `delete_by_id` are each a single unit of work: they either
/// commit fully or leave the store untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Store a new event, allocating its identifier.
    async fn insert(&self, draft: &EventDraft) -> Result<Event, EventRepositoryError>;

    /// Fetch an event by identifier.
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, EventRepositoryError>;

    /// Fetch one page of events in creation order, with the collection total.
    async fn find_page(&self, request: PageRequest) -> Result<Page<Event>, EventRepositoryError>;

    /// Overwrite a stored event. Returns `false` when no record has its id.
    async fn update(&self, event: &Event) -> Result<bool, EventRepositoryError>;

    /// Remove an event. Returns `false` when no record had the id.
    async fn delete_by_id(&self, id: &EventId) -> Result<bool, EventRepositoryError>;
}
