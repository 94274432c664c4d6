//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the hypermedia event endpoints, the plain JSON
//! endpoints under `/api/v1`, the health probes, and the schema wrappers from
//! [`crate::inbound::http::schemas`] that describe framework-agnostic domain
//! types.
//!
//! The generated document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::events_dto::{EventBody, EventCreationBody, EventPatchBody};
use crate::inbound::http::events_json::EventPageBody;
use crate::inbound::http::hypermedia::{EventCollection, EventResource};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, PageMetadataSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Events API",
        description = "Create, list, read, patch and delete events. Root routes \
                       return HAL documents; `/api/v1` routes return plain JSON."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::events::create_event,
        crate::inbound::http::events::list_events,
        crate::inbound::http::events::get_event,
        crate::inbound::http::events::update_event,
        crate::inbound::http::events::delete_event,
        crate::inbound::http::events_json::create_event_json,
        crate::inbound::http::events_json::list_events_json,
        crate::inbound::http::events_json::get_event_json,
        crate::inbound::http::events_json::update_event_json,
        crate::inbound::http::events_json::delete_event_json,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EventCreationBody,
        EventPatchBody,
        EventBody,
        EventResource,
        EventCollection,
        EventPageBody,
        ErrorSchema,
        ErrorCodeSchema,
        PageMetadataSchema,
    )),
    tags(
        (name = "events", description = "Hypermedia event resources"),
        (name = "events-json", description = "Plain JSON event resources"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
