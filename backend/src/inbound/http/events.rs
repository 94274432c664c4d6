//! Hypermedia event handlers.
//!
//! ```text
//! POST   /events
//! GET    /events?page=&size=
//! GET    /events/{id}
//! PATCH  /events/{id}
//! DELETE /events/{id}
//! ```
//!
//! Responses are HAL documents; single reads and patch results carry
//! HAL-FORMS affordances.

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, delete, get, patch, post, web};
use serde::Serialize;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::events_dto::{
    EventCreationBody, EventPatchBody, EventPath, parse_creation_body, parse_patch_body,
};
use crate::inbound::http::hypermedia::{
    EventCollection, EventResource, HAL_JSON, RouteContext, event_collection, event_resource,
    event_resource_with_affordances,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::PageQuery;

/// Resource name of the collection route, used to build absolute links.
pub const EVENTS_ROUTE: &str = "events";

/// Build the link context from the named collection route.
///
/// The request's query string is kept so paging links preserve unrelated
/// parameters.
pub(crate) fn route_context(req: &HttpRequest, route: &str) -> Result<RouteContext, Error> {
    let mut collection = req
        .url_for_static(route)
        .map_err(|err| Error::internal(format!("failed to build {route} url: {err}")))?;
    let query = req.query_string();
    if !query.is_empty() {
        collection.set_query(Some(query));
    }
    Ok(RouteContext::new(collection))
}

fn not_found() -> Error {
    Error::not_found("event not found")
}

fn hal(status: StatusCode, body: &impl Serialize) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((header::CONTENT_TYPE, HAL_JSON))
        .json(body)
}

/// Create an event.
#[utoipa::path(
    post,
    path = "/events",
    request_body = EventCreationBody,
    responses(
        (status = 201, description = "Event created", body = EventResource,
            content_type = "application/hal+json",
            headers(("Location" = String, description = "URL of the new event"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["events"],
    operation_id = "createEvent"
)]
#[post("/events")]
pub async fn create_event(
    req: HttpRequest,
    state: web::Data<HttpState>,
    payload: web::Json<EventCreationBody>,
) -> ApiResult<HttpResponse> {
    let context = route_context(&req, EVENTS_ROUTE)?;
    let payload = parse_creation_body(payload.into_inner())?;

    let created = state.events.create_event(payload).await?;
    let resource = event_resource(created, &context);

    let mut response = hal(StatusCode::CREATED, &resource);
    if let Ok(location) = header::HeaderValue::from_str(&resource.links.self_link.href) {
        response.headers_mut().insert(header::LOCATION, location);
    }
    Ok(response)
}

/// List one page of events.
#[utoipa::path(
    get,
    path = "/events",
    params(
        ("page" = Option<u32>, Query, description = "Zero-based page index"),
        ("size" = Option<u32>, Query, description = "Page size, at most 2000")
    ),
    responses(
        (status = 200, description = "Page of events", body = EventCollection,
            content_type = "application/hal+json"),
        (status = 400, description = "Invalid page parameters", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["events"],
    operation_id = "listEvents"
)]
#[get("/events", name = "events")]
pub async fn list_events(
    req: HttpRequest,
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<HttpResponse> {
    let request = query.into_inner().into_request()?;
    let context = route_context(&req, EVENTS_ROUTE)?;

    let page = state.events_query.list_events(request).await?;
    Ok(hal(StatusCode::OK, &event_collection(page, &context)))
}

/// Read one event with its affordances.
#[utoipa::path(
    get,
    path = "/events/{id}",
    params(("id" = String, Path, description = "Event identifier (UUID)")),
    responses(
        (status = 200, description = "The event", body = EventResource,
            content_type = "application/hal+json"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Unknown event", body = ErrorSchema)
    ),
    tags = ["events"],
    operation_id = "getEvent"
)]
#[get("/events/{id}")]
pub async fn get_event(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<EventPath>,
) -> ApiResult<HttpResponse> {
    let id = path.event_id()?;
    let context = route_context(&req, EVENTS_ROUTE)?;

    let event = state.events_query.get_event(id).await?.ok_or_else(not_found)?;
    Ok(hal(
        StatusCode::OK,
        &event_resource_with_affordances(event, &context),
    ))
}

/// Patch the fields present in the body.
#[utoipa::path(
    patch,
    path = "/events/{id}",
    params(("id" = String, Path, description = "Event identifier (UUID)")),
    request_body = EventPatchBody,
    responses(
        (status = 200, description = "The updated event", body = EventResource,
            content_type = "application/hal+json"),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown event", body = ErrorSchema)
    ),
    tags = ["events"],
    operation_id = "updateEvent"
)]
#[patch("/events/{id}")]
pub async fn update_event(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<EventPath>,
    payload: web::Json<EventPatchBody>,
) -> ApiResult<HttpResponse> {
    let id = path.event_id()?;
    let patch = parse_patch_body(payload.into_inner())?;
    let context = route_context(&req, EVENTS_ROUTE)?;

    let updated = state
        .events
        .update_event(id, patch)
        .await?
        .ok_or_else(not_found)?;
    Ok(hal(
        StatusCode::OK,
        &event_resource_with_affordances(updated, &context),
    ))
}

/// Delete an event. Unknown ids succeed.
#[utoipa::path(
    delete,
    path = "/events/{id}",
    params(("id" = String, Path, description = "Event identifier (UUID)")),
    responses(
        (status = 204, description = "Event removed or already absent"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema)
    ),
    tags = ["events"],
    operation_id = "deleteEvent"
)]
#[delete("/events/{id}")]
pub async fn delete_event(
    state: web::Data<HttpState>,
    path: web::Path<EventPath>,
) -> ApiResult<HttpResponse> {
    let id = path.event_id()?;
    state.events.delete_event(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
