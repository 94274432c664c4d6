//! Event data model.
//!
//! An [`Event`] is a titled interval between two local date-times. Events that
//! have not been stored yet are [`EventDraft`]s; only the repository turns a
//! draft into an [`Event`] by allocating its [`EventId`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::{Error, EventUpdateRequest};

/// Maximum number of characters in an event title.
pub const TITLE_MAX: usize = 255;

/// Validation errors raised while building event write requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventValidationError {
    /// Title is empty or whitespace only.
    #[error("title must not be blank")]
    BlankTitle,
    /// Title exceeds [`TITLE_MAX`] characters.
    #[error("title must be at most {max} characters")]
    TitleTooLong { max: usize },
    /// A required field was not supplied.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
    /// The interval starts after it ends.
    #[error("start {start} must not be after end {end}")]
    StartAfterEnd {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl EventValidationError {
    /// Stable machine-readable code for the failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BlankTitle | Self::TitleTooLong { .. } => "blank_or_too_long_title",
            Self::MissingField { .. } => "missing_field",
            Self::StartAfterEnd { .. } => "start_after_end",
        }
    }

    /// Name of the offending request field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::BlankTitle | Self::TitleTooLong { .. } => "title",
            Self::MissingField { field } => *field,
            Self::StartAfterEnd { .. } => "start",
        }
    }
}

impl From<EventValidationError> for Error {
    fn from(value: EventValidationError) -> Self {
        Self::invalid_request(value.to_string()).with_details(json!({
            "field": value.field(),
            "code": value.code(),
        }))
    }
}

/// Stable event identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EventId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Non-blank event title of at most [`TITLE_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventTitle(String);

impl EventTitle {
    /// Validate and construct a title.
    ///
    /// # Examples
    /// ```
    /// use events_api::domain::{EventTitle, EventValidationError};
    ///
    /// assert!(EventTitle::new("Lean coffee").is_ok());
    /// assert_eq!(EventTitle::new("  "), Err(EventValidationError::BlankTitle));
    /// ```
    pub fn new(title: impl Into<String>) -> Result<Self, EventValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(EventValidationError::BlankTitle);
        }
        if title.chars().count() > TITLE_MAX {
            return Err(EventValidationError::TitleTooLong { max: TITLE_MAX });
        }
        Ok(Self(title))
    }

    /// Borrow the title text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for EventTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EventTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EventTitle> for String {
    fn from(value: EventTitle) -> Self {
        value.0
    }
}

impl TryFrom<String> for EventTitle {
    type Error = EventValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Event contents awaiting their first write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    title: EventTitle,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl EventDraft {
    pub(crate) const fn new(title: EventTitle, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { title, start, end }
    }

    /// Title to store.
    #[must_use]
    pub const fn title(&self) -> &EventTitle {
        &self.title
    }

    /// Interval start.
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Interval end.
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Attach the identifier allocated by storage.
    #[must_use]
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            start: self.start,
            end: self.end,
        }
    }
}

/// A stored event.
///
/// ## Invariants
/// - `id` never changes once allocated.
/// - `start <= end` is checked by write requests only; a record produced by
///   a single-sided update may violate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    title: EventTitle,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Event {
    /// Rehydrate a stored event.
    #[must_use]
    pub const fn new(
        id: EventId,
        title: EventTitle,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            title,
            start,
            end,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> EventId {
        self.id
    }

    /// Event title.
    #[must_use]
    pub const fn title(&self) -> &EventTitle {
        &self.title
    }

    /// Interval start.
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Interval end.
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Overwrite every field present in `patch`, leaving the others untouched.
    pub(crate) fn apply(&mut self, patch: EventUpdateRequest) {
        let (title, start, end) = patch.into_parts();
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(start) = start {
            self.start = start;
        }
        if let Some(end) = end {
            self.end = end;
        }
    }
}
