//! Shared validation helpers for inbound HTTP adapters.
//!
//! Parsing failures become `invalid_request` errors whose details name the
//! offending field and a stable code.

use chrono::{NaiveDateTime, SubsecRound};
use pagination::PageRequest;
use serde::{Deserialize, Deserializer};
use serde_json::json;

use crate::domain::{Error, EventId};

/// Accepted textual form of local timestamps. Fractional seconds are optional.
pub(crate) const LOCAL_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Stored timestamps keep microsecond precision.
const STORED_SUBSEC_DIGITS: u16 = 6;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidUuid,
    InvalidTimestamp,
    InvalidPage,
    NullField,
    InvalidBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidTimestamp => "invalid_timestamp",
            ErrorCode::InvalidPage => "invalid_page",
            ErrorCode::NullField => "null_field",
            ErrorCode::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a valid UUID"))
        .with_value(ErrorCode::InvalidUuid, value)
}

pub(crate) fn invalid_timestamp_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(
        field,
        format!("{field} must be a local date-time like 2001-01-01T12:00:00"),
    )
    .with_value(ErrorCode::InvalidTimestamp, value)
}

pub(crate) fn invalid_page_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a non-negative integer"))
        .with_value(ErrorCode::InvalidPage, value)
}

pub(crate) fn null_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} cannot be cleared"))
        .with_code(ErrorCode::NullField)
}

/// Request bodies that fail to decode as JSON.
pub(crate) fn invalid_body_error(message: impl std::fmt::Display) -> Error {
    ValidationError::new("body", format!("request body is invalid: {message}"))
        .with_code(ErrorCode::InvalidBody)
}

pub(crate) fn parse_event_id(value: &str) -> Result<EventId, Error> {
    value
        .parse()
        .map_err(|_| invalid_uuid_error(FieldName::new("id"), value))
}

/// Parse a local timestamp, truncating fractions finer than a microsecond.
pub(crate) fn parse_local_date_time(value: &str, field: FieldName) -> Result<NaiveDateTime, Error> {
    NaiveDateTime::parse_from_str(value, LOCAL_DATE_TIME_FORMAT)
        .map(|parsed| parsed.trunc_subsecs(STORED_SUBSEC_DIGITS))
        .map_err(|_| invalid_timestamp_error(field, value))
}

pub(crate) fn parse_optional_local_date_time(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<NaiveDateTime>, Error> {
    value
        .map(|raw| parse_local_date_time(&raw, field))
        .transpose()
}

fn parse_page_param(value: Option<&str>, field: FieldName) -> Result<Option<u32>, Error> {
    value
        .map(|raw| {
            raw.trim()
                .parse::<u32>()
                .map_err(|_| invalid_page_error(field, raw))
        })
        .transpose()
}

/// Raw `page`/`size` query parameters.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageQuery {
    page: Option<String>,
    size: Option<String>,
}

impl PageQuery {
    /// Resolve into a page request, applying defaults and clamping the size.
    pub(crate) fn into_request(self) -> Result<PageRequest, Error> {
        let number = parse_page_param(self.page.as_deref(), FieldName::new("page"))?;
        let size_field = FieldName::new("size");
        let size = parse_page_param(self.size.as_deref(), size_field)?;
        PageRequest::from_parts(number, size).map_err(|_| {
            invalid_page_error(size_field, self.size.as_deref().unwrap_or_default())
        })
    }
}

/// A JSON field that may be missing, explicitly `null`, or set.
///
/// Use with `#[serde(default)]` so missing fields decode as [`Presence::Absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence<T> {
    /// The field was not sent.
    Absent,
    /// The field was sent as `null`.
    Null,
    /// The field carried a value.
    Value(T),
}

impl<T> Default for Presence<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<'de, T> Deserialize<'de> for Presence<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Value(value),
            None => Self::Null,
        })
    }
}

impl<T> Presence<T> {
    /// Collapse into an `Option`, rejecting explicit nulls.
    pub(crate) fn into_patch(self, field: FieldName) -> Result<Option<T>, Error> {
        match self {
            Self::Absent => Ok(None),
            Self::Null => Err(null_field_error(field)),
            Self::Value(value) => Ok(Some(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::Value;

    use super::*;

    fn detail<'a>(error: &'a Error, key: &str) -> Option<&'a str> {
        error
            .details()
            .and_then(|details| details.get(key))
            .and_then(Value::as_str)
    }

    #[rstest]
    #[case("2001-01-01T00:00:00", "2001-01-01T00:00:00")]
    #[case("2001-01-01T12:30:15.250", "2001-01-01T12:30:15.250")]
    #[case("2001-01-01T12:30:15.123456", "2001-01-01T12:30:15.123456")]
    #[case("2001-01-01T12:30:15.123456789", "2001-01-01T12:30:15.123456")]
    #[case("2001-01-01T12:30:15.000000999", "2001-01-01T12:30:15")]
    fn local_date_times_parse(#[case] raw: &str, #[case] expected: &str) {
        let parsed = parse_local_date_time(raw, FieldName::new("start")).expect("valid timestamp");
        assert_eq!(parsed.format(LOCAL_DATE_TIME_FORMAT).to_string(), expected);
    }

    #[rstest]
    #[case("2001-01-01")]
    #[case("2001-01-01T00:00:00Z")]
    #[case("yesterday")]
    fn malformed_date_times_are_rejected(#[case] raw: &str) {
        let error = parse_local_date_time(raw, FieldName::new("end")).expect_err("invalid");
        assert_eq!(detail(&error, "field"), Some("end"));
        assert_eq!(detail(&error, "code"), Some("invalid_timestamp"));
        assert_eq!(detail(&error, "value"), Some(raw));
    }

    #[rstest]
    fn malformed_ids_are_rejected() {
        let error = parse_event_id("not-a-uuid").expect_err("invalid");
        assert_eq!(detail(&error, "code"), Some("invalid_uuid"));
    }

    #[rstest]
    #[case(None, None, 0, 20)]
    #[case(Some("2"), Some("5"), 2, 5)]
    #[case(Some("0"), Some("5000"), 0, 2000)]
    fn page_queries_resolve(
        #[case] page: Option<&str>,
        #[case] size: Option<&str>,
        #[case] number: u32,
        #[case] expected_size: u32,
    ) {
        let query = PageQuery {
            page: page.map(str::to_owned),
            size: size.map(str::to_owned),
        };
        let request = query.into_request().expect("valid query");
        assert_eq!(request.number(), number);
        assert_eq!(request.size(), expected_size);
    }

    #[rstest]
    #[case(Some("-1"), None, "page")]
    #[case(Some("first"), None, "page")]
    #[case(None, Some("-20"), "size")]
    #[case(None, Some("0"), "size")]
    fn page_queries_reject_bad_values(
        #[case] page: Option<&str>,
        #[case] size: Option<&str>,
        #[case] field: &str,
    ) {
        let query = PageQuery {
            page: page.map(str::to_owned),
            size: size.map(str::to_owned),
        };
        let error = query.into_request().expect_err("invalid query");
        assert_eq!(detail(&error, "field"), Some(field));
        assert_eq!(detail(&error, "code"), Some("invalid_page"));
    }

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default)]
        title: Presence<String>,
    }

    #[rstest]
    #[case(r#"{}"#, Presence::Absent)]
    #[case(r#"{"title":null}"#, Presence::Null)]
    #[case(r#"{"title":"x"}"#, Presence::Value("x".to_owned()))]
    fn presence_distinguishes_missing_from_null(
        #[case] body: &str,
        #[case] expected: Presence<String>,
    ) {
        let patch: Patch = serde_json::from_str(body).expect("valid json");
        assert_eq!(patch.title, expected);
    }

    #[rstest]
    fn explicit_null_cannot_become_a_patch() {
        let error = Presence::<String>::Null
            .into_patch(FieldName::new("title"))
            .expect_err("null rejected");
        assert_eq!(detail(&error, "code"), Some("null_field"));
        assert_eq!(detail(&error, "field"), Some("title"));
    }
}
