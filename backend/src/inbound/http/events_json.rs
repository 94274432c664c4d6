//! Plain JSON event handlers without hypermedia.
//!
//! ```text
//! POST   /api/v1/events
//! GET    /api/v1/events?page=&size=
//! GET    /api/v1/events/{id}
//! PATCH  /api/v1/events/{id}
//! DELETE /api/v1/events/{id}
//! ```
//!
//! Listings use a flat page envelope instead of HAL links.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, delete, get, patch, post, web};
use pagination::Page;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Error, EventResponse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::events::route_context;
use crate::inbound::http::events_dto::{
    EventBody, EventCreationBody, EventPatchBody, EventPath, parse_creation_body,
    parse_patch_body,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::PageQuery;

/// Resource name of the plain JSON collection route.
pub const API_EVENTS_ROUTE: &str = "api_events";

/// Flat page envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventPageBody {
    pub content: Vec<EventBody>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u32,
    pub size: u32,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl From<Page<EventResponse>> for EventPageBody {
    fn from(page: Page<EventResponse>) -> Self {
        let total_elements = page.total_elements();
        let total_pages = page.total_pages();
        let number = page.number();
        let size = page.size();
        let number_of_elements = page.number_of_elements();
        let first = !page.has_previous();
        let last = !page.has_next();
        Self {
            content: page.into_content().into_iter().map(EventBody::from).collect(),
            total_elements,
            total_pages,
            number,
            size,
            number_of_elements,
            first,
            last,
            empty: number_of_elements == 0,
        }
    }
}

fn not_found() -> Error {
    Error::not_found("event not found")
}

/// Create an event.
#[utoipa::path(
    post,
    path = "/api/v1/events",
    request_body = EventCreationBody,
    responses(
        (status = 201, description = "Event created", body = EventBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["events-json"],
    operation_id = "createEventJson"
)]
#[post("/events")]
pub async fn create_event_json(
    req: HttpRequest,
    state: web::Data<HttpState>,
    payload: web::Json<EventCreationBody>,
) -> ApiResult<HttpResponse> {
    let context = route_context(&req, API_EVENTS_ROUTE)?;
    let payload = parse_creation_body(payload.into_inner())?;

    let created = state.events.create_event(payload).await?;
    let location = context.item(created.id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location.as_str()))
        .json(EventBody::from(created)))
}

/// List one page of events.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    params(
        ("page" = Option<u32>, Query, description = "Zero-based page index"),
        ("size" = Option<u32>, Query, description = "Page size, at most 2000")
    ),
    responses(
        (status = 200, description = "Page of events", body = EventPageBody),
        (status = 400, description = "Invalid page parameters", body = ErrorSchema)
    ),
    tags = ["events-json"],
    operation_id = "listEventsJson"
)]
#[get("/events", name = "api_events")]
pub async fn list_events_json(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<EventPageBody>> {
    let request = query.into_inner().into_request()?;
    let page = state.events_query.list_events(request).await?;
    Ok(web::Json(EventPageBody::from(page)))
}

/// Read one event.
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}",
    params(("id" = String, Path, description = "Event identifier (UUID)")),
    responses(
        (status = 200, description = "The event", body = EventBody),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Unknown event", body = ErrorSchema)
    ),
    tags = ["events-json"],
    operation_id = "getEventJson"
)]
#[get("/events/{id}")]
pub async fn get_event_json(
    state: web::Data<HttpState>,
    path: web::Path<EventPath>,
) -> ApiResult<web::Json<EventBody>> {
    let id = path.event_id()?;
    let event = state.events_query.get_event(id).await?.ok_or_else(not_found)?;
    Ok(web::Json(EventBody::from(event)))
}

/// Patch the fields present in the body.
#[utoipa::path(
    patch,
    path = "/api/v1/events/{id}",
    params(("id" = String, Path, description = "Event identifier (UUID)")),
    request_body = EventPatchBody,
    responses(
        (status = 200, description = "The updated event", body = EventBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown event", body = ErrorSchema)
    ),
    tags = ["events-json"],
    operation_id = "updateEventJson"
)]
#[patch("/events/{id}")]
pub async fn update_event_json(
    state: web::Data<HttpState>,
    path: web::Path<EventPath>,
    payload: web::Json<EventPatchBody>,
) -> ApiResult<web::Json<EventBody>> {
    let id = path.event_id()?;
    let patch = parse_patch_body(payload.into_inner())?;
    let updated = state
        .events
        .update_event(id, patch)
        .await?
        .ok_or_else(not_found)?;
    Ok(web::Json(EventBody::from(updated)))
}

/// Delete an event. Unknown ids succeed.
#[utoipa::path(
    delete,
    path = "/api/v1/events/{id}",
    params(("id" = String, Path, description = "Event identifier (UUID)")),
    responses(
        (status = 204, description = "Event removed or already absent"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema)
    ),
    tags = ["events-json"],
    operation_id = "deleteEventJson"
)]
#[delete("/events/{id}")]
pub async fn delete_event_json(
    state: web::Data<HttpState>,
    path: web::Path<EventPath>,
) -> ApiResult<HttpResponse> {
    let id = path.event_id()?;
    state.events.delete_event(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
