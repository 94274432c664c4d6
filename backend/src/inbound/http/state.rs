//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EventCommand, EventQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub events: Arc<dyn EventCommand>,
    pub events_query: Arc<dyn EventQuery>,
}

impl HttpState {
    /// Bundle separate command and query ports.
    pub fn new(events: Arc<dyn EventCommand>, events_query: Arc<dyn EventQuery>) -> Self {
        Self {
            events,
            events_query,
        }
    }

    /// Use one service for both the command and query ports.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use events_api::domain::EventService;
    /// use events_api::inbound::http::state::HttpState;
    /// use events_api::outbound::memory::InMemoryEventRepository;
    ///
    /// let service = Arc::new(EventService::new(Arc::new(InMemoryEventRepository::new())));
    /// let _state = HttpState::from_service(service);
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: EventCommand + EventQuery + 'static,
    {
        Self {
            events: service.clone(),
            events_query: service,
        }
    }
}
