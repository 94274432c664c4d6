//! Process-local `EventRepository` implementation.
//!
//! Events are kept in insertion order, which is the listing order. Every
//! operation holds the store lock for its whole unit of work.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::ports::{EventRepository, EventRepositoryError};
use crate::domain::{Event, EventDraft, EventId};

/// Event storage backed by a shared vector.
///
/// Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventRepository {
    events: Arc<Mutex<Vec<Event>>>,
}

impl InMemoryEventRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Event>>, EventRepositoryError> {
        self.events
            .lock()
            .map_err(|_| EventRepositoryError::query("event store poisoned"))
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn insert(&self, draft: &EventDraft) -> Result<Event, EventRepositoryError> {
        let mut events = self.lock()?;
        let mut id = EventId::random();
        while events.iter().any(|event| event.id() == id) {
            id = EventId::random();
        }
        let event = draft.clone().into_event(id);
        events.push(event.clone());
        Ok(event)
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, EventRepositoryError> {
        let events = self.lock()?;
        Ok(events.iter().find(|event| event.id() == *id).cloned())
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Event>, EventRepositoryError> {
        let events = self.lock()?;
        let total = events.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content = events
            .iter()
            .skip(offset)
            .take(request.size() as usize)
            .cloned()
            .collect();
        Ok(Page::new(content, request, total))
    }

    async fn update(&self, event: &Event) -> Result<bool, EventRepositoryError> {
        let mut events = self.lock()?;
        match events.iter_mut().find(|stored| stored.id() == event.id()) {
            Some(stored) => {
                *stored = event.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: &EventId) -> Result<bool, EventRepositoryError> {
        let mut events = self.lock()?;
        let before = events.len();
        events.retain(|event| event.id() != *id);
        Ok(events.len() != before)
    }
}
