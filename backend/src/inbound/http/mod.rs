//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod events;
pub mod events_dto;
pub mod events_json;
pub mod health;
pub mod hypermedia;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;

/// Register every event and probe route on an application or scope.
///
/// The HAL surface lives at the root, the plain JSON surface under `/api/v1`.
/// Handlers expect [`state::HttpState`] and the probes expect
/// [`health::HealthState`] in application data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(events::create_event)
        .service(events::list_events)
        .service(events::get_event)
        .service(events::update_event)
        .service(events::delete_event)
        .service(
            web::scope("/api/v1")
                .service(events_json::create_event_json)
                .service(events_json::list_events_json)
                .service(events_json::get_event_json)
                .service(events_json::update_event_json)
                .service(events_json::delete_event_json),
        )
        .service(health::ready)
        .service(health::live);
}
