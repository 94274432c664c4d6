//! Tests for the hypermedia event handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::NaiveDate;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{CreateEventPayload, EventCommand, MockEventCommand, MockEventQuery};
use crate::domain::{ErrorCode, EventService};
use crate::inbound::http::configure;
use crate::outbound::memory::InMemoryEventRepository;

type MemoryService = EventService<InMemoryEventRepository>;

fn memory_service() -> Arc<MemoryService> {
    Arc::new(EventService::new(Arc::new(InMemoryEventRepository::new())))
}

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure)
}

fn sample_event() -> Value {
    json!({
        "title": "Some event",
        "start": "2001-01-01T00:00:00",
        "end": "2001-01-01T12:00:00"
    })
}

async fn seed(service: &MemoryService, count: u32) {
    let start = NaiveDate::from_ymd_opt(2001, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid start");
    for index in 0..count {
        service
            .create_event(CreateEventPayload {
                title: Some(format!("event {index}")),
                start: Some(start),
                end: Some(start),
            })
            .await
            .expect("seeded event");
    }
}

fn detail_code(body: &Value) -> Option<&str> {
    body.get("details")
        .and_then(|details| details.get("code"))
        .and_then(Value::as_str)
}

fn detail_field(body: &Value) -> Option<&str> {
    body.get("details")
        .and_then(|details| details.get("field"))
        .and_then(Value::as_str)
}

fn self_href(body: &Value) -> &str {
    body["_links"]["self"]["href"]
        .as_str()
        .expect("self link href")
}

#[actix_web::test]
async fn create_returns_hal_resource_with_location() {
    let app = actix_test::init_service(test_app(HttpState::from_service(memory_service()))).await;

    let request = actix_test::TestRequest::post()
        .uri("/events")
        .set_json(sample_event())
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert_eq!(content_type.as_deref(), Some(HAL_JSON));
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("location header");

    let body: Value = actix_test::read_body_json(response).await;
    let id = body["id"].as_str().expect("id");
    assert_eq!(body["title"], "Some event");
    assert_eq!(body["start"], "2001-01-01T00:00:00");
    assert_eq!(body["end"], "2001-01-01T12:00:00");
    assert_eq!(self_href(&body), location);
    assert!(location.ends_with(&format!("/events/{id}")));
}

#[rstest]
#[case(json!({"title": "e", "start": "2001-01-02T00:00:00", "end": "2001-01-01T00:00:00"}), "start", "start_after_end")]
#[case(json!({"title": "   ", "start": "2001-01-01T00:00:00", "end": "2001-01-01T00:00:00"}), "title", "blank_or_too_long_title")]
#[case(json!({"start": "2001-01-01T00:00:00", "end": "2001-01-01T00:00:00"}), "title", "missing_field")]
#[case(json!({"title": "e", "start": "yesterday", "end": "2001-01-01T00:00:00"}), "start", "invalid_timestamp")]
#[actix_web::test]
async fn create_rejects_invalid_payloads(
    #[case] payload: Value,
    #[case] field: &str,
    #[case] code: &str,
) {
    let app = actix_test::init_service(test_app(HttpState::from_service(memory_service()))).await;

    let request = actix_test::TestRequest::post()
        .uri("/events")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(detail_field(&body), Some(field));
    assert_eq!(detail_code(&body), Some(code));
}

#[actix_web::test]
async fn create_keeps_microsecond_precision() {
    let app = actix_test::init_service(test_app(HttpState::from_service(memory_service()))).await;

    let request = actix_test::TestRequest::post()
        .uri("/events")
        .set_json(json!({
            "title": "Precise",
            "start": "2001-01-01T00:00:00.123456789",
            "end": "2001-01-01T00:00:01.000000001"
        }))
        .to_request();
    let created: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(created["start"], "2001-01-01T00:00:00.123456");
    assert_eq!(created["end"], "2001-01-01T00:00:01");

    let path = format!("/events/{}", created["id"].as_str().expect("id"));
    let request = actix_test::TestRequest::get().uri(&path).to_request();
    let read: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(read["start"], created["start"]);
    assert_eq!(read["end"], created["end"]);
}

#[actix_web::test]
async fn create_rejects_undecodable_json() {
    let app = actix_test::init_service(test_app(HttpState::from_service(memory_service()))).await;

    let request = actix_test::TestRequest::post()
        .uri("/events")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"title\": ")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(detail_code(&body), Some("invalid_body"));
}

#[actix_web::test]
async fn get_returns_affordances() {
    let service = memory_service();
    let created = service
        .create_event(CreateEventPayload {
            title: Some("Some event".to_owned()),
            start: NaiveDate::from_ymd_opt(2001, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0)),
            end: NaiveDate::from_ymd_opt(2001, 1, 1).and_then(|d| d.and_hms_opt(12, 0, 0)),
        })
        .await
        .expect("created");
    let app = actix_test::init_service(test_app(HttpState::from_service(service))).await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/events/{}", created.id))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["id"], created.id.to_string());
    assert_eq!(body["_templates"]["update"]["method"], "PATCH");
    assert_eq!(body["_templates"]["delete"]["method"], "DELETE");
    assert!(self_href(&body).ends_with(&format!("/events/{}", created.id)));
}

#[rstest]
#[case("not-a-uuid", StatusCode::BAD_REQUEST)]
#[case("00000000-0000-0000-0000-000000000000", StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn get_rejects_bad_or_unknown_ids(#[case] id: &str, #[case] status: StatusCode) {
    let app = actix_test::init_service(test_app(HttpState::from_service(memory_service()))).await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/events/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), status);
}

#[actix_web::test]
async fn patch_changes_only_present_fields() {
    let app = actix_test::init_service(test_app(HttpState::from_service(memory_service()))).await;

    let request = actix_test::TestRequest::post()
        .uri("/events")
        .set_json(sample_event())
        .to_request();
    let created: Value = actix_test::call_and_read_body_json(&app, request).await;
    let id = created["id"].as_str().expect("id");

    let request = actix_test::TestRequest::patch()
        .uri(&format!("/events/{id}"))
        .set_json(json!({"title": "Some other event"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let patched: Value = actix_test::read_body_json(response).await;

    assert_eq!(patched["title"], "Some other event");
    assert_eq!(patched["start"], created["start"]);
    assert_eq!(patched["end"], created["end"]);
    assert!(patched.get("_templates").is_some());
}

#[rstest]
#[case(json!({"title": null}), "title", "null_field")]
#[case(json!({"start": "2001-01-02T00:00:00", "end": "2001-01-01T00:00:00"}), "start", "start_after_end")]
#[case(json!({"end": "noon"}), "end", "invalid_timestamp")]
#[actix_web::test]
async fn patch_rejects_invalid_changes(
    #[case] payload: Value,
    #[case] field: &str,
    #[case] code: &str,
) {
    let app = actix_test::init_service(test_app(HttpState::from_service(memory_service()))).await;

    let request = actix_test::TestRequest::post()
        .uri("/events")
        .set_json(sample_event())
        .to_request();
    let created: Value = actix_test::call_and_read_body_json(&app, request).await;
    let id = created["id"].as_str().expect("id");

    let request = actix_test::TestRequest::patch()
        .uri(&format!("/events/{id}"))
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(detail_field(&body), Some(field));
    assert_eq!(detail_code(&body), Some(code));
}

#[actix_web::test]
async fn patch_unknown_event_is_not_found() {
    let app = actix_test::init_service(test_app(HttpState::from_service(memory_service()))).await;

    let request = actix_test::TestRequest::patch()
        .uri("/events/00000000-0000-0000-0000-000000000000")
        .set_json(json!({"title": "x"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_is_idempotent() {
    let app = actix_test::init_service(test_app(HttpState::from_service(memory_service()))).await;

    let request = actix_test::TestRequest::post()
        .uri("/events")
        .set_json(sample_event())
        .to_request();
    let created: Value = actix_test::call_and_read_body_json(&app, request).await;
    let id = created["id"].as_str().expect("id").to_owned();

    for _ in 0..2 {
        let request = actix_test::TestRequest::delete()
            .uri(&format!("/events/{id}"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let request = actix_test::TestRequest::get()
        .uri(&format!("/events/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn patch_may_move_one_end_past_the_other() {
    let app = actix_test::init_service(test_app(HttpState::from_service(memory_service()))).await;

    let request = actix_test::TestRequest::post()
        .uri("/events")
        .set_json(sample_event())
        .to_request();
    let created: Value = actix_test::call_and_read_body_json(&app, request).await;
    let id = created["id"].as_str().expect("id");

    let request = actix_test::TestRequest::patch()
        .uri(&format!("/events/{id}"))
        .set_json(json!({"start": "2001-01-02T00:00:00"}))
        .to_request();
    let patched: Value = actix_test::call_and_read_body_json(&app, request).await;

    assert_eq!(patched["start"], "2001-01-02T00:00:00");
    assert_eq!(patched["end"], "2001-01-01T12:00:00");
}

#[actix_web::test]
async fn list_middle_page_links_every_direction() {
    let service = memory_service();
    seed(&service, 50).await;
    let app = actix_test::init_service(test_app(HttpState::from_service(service))).await;

    let request = actix_test::TestRequest::get()
        .uri("/events?page=1&size=20")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;

    let events = body["_embedded"]["events"].as_array().expect("embedded events");
    assert_eq!(events.len(), 20);
    assert_eq!(events.first().map(|event| &event["title"]), Some(&json!("event 20")));
    assert_eq!(
        body["page"],
        json!({"size": 20, "totalElements": 50, "totalPages": 3, "number": 1})
    );

    let links = &body["_links"];
    for (rel, page) in [("self", 1), ("first", 0), ("prev", 0), ("next", 2), ("last", 2)] {
        let href = links[rel]["href"].as_str().expect("link href");
        assert!(
            href.contains("/events?") && href.ends_with(&format!("page={page}&size=20")),
            "{rel} link was {href}"
        );
    }
    assert!(
        self_href(&events[0]).contains("/events/"),
        "embedded events carry their own links"
    );
}

#[actix_web::test]
async fn list_defaults_to_first_page_of_twenty() {
    let service = memory_service();
    seed(&service, 3).await;
    let app = actix_test::init_service(test_app(HttpState::from_service(service))).await;

    let request = actix_test::TestRequest::get().uri("/events").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["page"]["size"], 20);
    assert_eq!(body["page"]["number"], 0);
    assert!(body["_links"].get("next").is_none());
    assert!(body["_links"].get("first").is_none());
}

#[rstest]
#[case("/events?page=-1", "page")]
#[case("/events?page=abc", "page")]
#[case("/events?size=0", "size")]
#[actix_web::test]
async fn list_rejects_invalid_page_parameters(#[case] uri: &str, #[case] field: &str) {
    let app = actix_test::init_service(test_app(HttpState::from_service(memory_service()))).await;

    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(detail_field(&body), Some(field));
    assert_eq!(detail_code(&body), Some("invalid_page"));
}

#[actix_web::test]
async fn list_clamps_oversized_pages() {
    let app = actix_test::init_service(test_app(HttpState::from_service(memory_service()))).await;

    let request = actix_test::TestRequest::get()
        .uri("/events?size=5000")
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["page"]["size"], 2000);
}

#[actix_web::test]
async fn storage_outage_is_service_unavailable() {
    let mut query = MockEventQuery::new();
    query
        .expect_list_events()
        .times(1)
        .return_once(|_| Err(Error::service_unavailable("event repository unavailable")));
    let state = HttpState::new(Arc::new(MockEventCommand::new()), Arc::new(query));
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::get().uri("/events").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "service_unavailable");
}

#[actix_web::test]
async fn internal_failures_are_redacted() {
    let mut command = MockEventCommand::new();
    command
        .expect_delete_event()
        .times(1)
        .return_once(|_| Err(Error::internal("relation \"events\" does not exist")));
    let state = HttpState::new(Arc::new(command), Arc::new(MockEventQuery::new()));
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::delete()
        .uri("/events/00000000-0000-0000-0000-000000000000")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Error = actix_test::read_body_json(response).await;
    assert_eq!(body.code(), ErrorCode::InternalError);
    assert_eq!(body.message(), "Internal server error");
}
