//! Event DTOs shared by the HAL and plain JSON event endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CreateEventPayload, UpdateEventPayload};
use crate::domain::{Error, EventId, EventResponse};
use crate::inbound::http::validation::{
    FieldName, LOCAL_DATE_TIME_FORMAT, Presence, parse_event_id, parse_local_date_time,
    parse_optional_local_date_time,
};

const TITLE: FieldName = FieldName::new("title");
const START: FieldName = FieldName::new("start");
const END: FieldName = FieldName::new("end");

#[derive(Debug, Deserialize)]
pub(super) struct EventPath {
    pub(super) id: String,
}

impl EventPath {
    pub(super) fn event_id(&self) -> Result<EventId, Error> {
        parse_event_id(&self.id)
    }
}

/// Request payload for creating an event.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct EventCreationBody {
    #[schema(max_length = 255, example = "Some event")]
    pub title: Option<String>,
    #[schema(example = "2001-01-01T00:00:00")]
    pub start: Option<String>,
    #[schema(example = "2001-01-01T12:00:00")]
    pub end: Option<String>,
}

/// Request payload for patching an event. Omitted fields are left unchanged;
/// `null` is rejected.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct EventPatchBody {
    #[serde(default)]
    #[schema(value_type = Option<String>, max_length = 255)]
    pub title: Presence<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "2001-01-01T00:00:00")]
    pub start: Presence<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "2001-01-01T12:00:00")]
    pub end: Presence<String>,
}

/// Event fields as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub title: String,
    #[schema(example = "2001-01-01T00:00:00")]
    pub start: String,
    #[schema(example = "2001-01-01T12:00:00")]
    pub end: String,
}

impl From<EventResponse> for EventBody {
    fn from(value: EventResponse) -> Self {
        Self {
            id: value.id.to_string(),
            title: value.title,
            start: value.start.format(LOCAL_DATE_TIME_FORMAT).to_string(),
            end: value.end.format(LOCAL_DATE_TIME_FORMAT).to_string(),
        }
    }
}

pub(super) fn parse_creation_body(body: EventCreationBody) -> Result<CreateEventPayload, Error> {
    Ok(CreateEventPayload {
        title: body.title,
        start: parse_optional_local_date_time(body.start, START)?,
        end: parse_optional_local_date_time(body.end, END)?,
    })
}

pub(super) fn parse_patch_body(body: EventPatchBody) -> Result<UpdateEventPayload, Error> {
    let title = body.title.into_patch(TITLE)?;
    let start = body
        .start
        .into_patch(START)?
        .map(|raw| parse_local_date_time(&raw, START))
        .transpose()?;
    let end = body
        .end
        .into_patch(END)?
        .map(|raw| parse_local_date_time(&raw, END))
        .transpose()?;
    Ok(UpdateEventPayload { title, start, end })
}
