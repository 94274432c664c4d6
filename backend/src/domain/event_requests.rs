//! Validated write requests for events.
//!
//! Both requests are pure values: constructing one either yields a normalized
//! request or an [`EventValidationError`], and never touches storage.

use chrono::NaiveDateTime;

use super::{EventDraft, EventTitle, EventValidationError};

fn ensure_ordered(start: NaiveDateTime, end: NaiveDateTime) -> Result<(), EventValidationError> {
    if start > end {
        return Err(EventValidationError::StartAfterEnd { start, end });
    }
    Ok(())
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, EventValidationError> {
    value.ok_or(EventValidationError::MissingField { field })
}

/// Inputs for a new event.
///
/// ## Invariants
/// - every field is present;
/// - `start <= end` (equal instants are allowed).
///
/// # Examples
/// ```
/// use chrono::NaiveDateTime;
/// use events_api::domain::{EventCreationRequest, EventValidationError};
///
/// let start: NaiveDateTime = "2001-01-01T00:00:00".parse().expect("timestamp");
/// let end: NaiveDateTime = "2001-01-01T12:00:00".parse().expect("timestamp");
///
/// assert!(EventCreationRequest::new(Some("Some event".into()), Some(start), Some(end)).is_ok());
/// assert!(matches!(
///     EventCreationRequest::new(Some("Some event".into()), Some(end), Some(start)),
///     Err(EventValidationError::StartAfterEnd { .. })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCreationRequest {
    draft: EventDraft,
}

impl EventCreationRequest {
    /// Validate raw creation inputs.
    ///
    /// Checks run in field order (`title`, `start`, `end`) and the first
    /// failure is reported.
    pub fn new(
        title: Option<String>,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Result<Self, EventValidationError> {
        let title = EventTitle::new(required(title, "title")?)?;
        let start = required(start, "start")?;
        let end = required(end, "end")?;
        ensure_ordered(start, end)?;
        Ok(Self {
            draft: EventDraft::new(title, start, end),
        })
    }

    /// Validated event contents.
    #[must_use]
    pub const fn draft(&self) -> &EventDraft {
        &self.draft
    }

    /// Consume the request, yielding the draft to store.
    #[must_use]
    pub fn into_draft(self) -> EventDraft {
        self.draft
    }
}

/// Sparse patch for an existing event.
///
/// An absent field means "leave unchanged"; clearing a field is not
/// expressible. `start <= end` is only checked when both are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventUpdateRequest {
    title: Option<EventTitle>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
}

impl EventUpdateRequest {
    /// Validate raw patch inputs.
    ///
    /// # Examples
    /// ```
    /// use events_api::domain::EventUpdateRequest;
    ///
    /// let patch = EventUpdateRequest::new(Some("Renamed".into()), None, None).expect("valid");
    /// assert_eq!(patch.title().map(|t| t.as_str()), Some("Renamed"));
    /// assert!(patch.start().is_none());
    /// ```
    pub fn new(
        title: Option<String>,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Result<Self, EventValidationError> {
        let title = title.map(EventTitle::new).transpose()?;
        if let (Some(start), Some(end)) = (start, end) {
            ensure_ordered(start, end)?;
        }
        Ok(Self { title, start, end })
    }

    /// Replacement title, if any.
    #[must_use]
    pub const fn title(&self) -> Option<&EventTitle> {
        self.title.as_ref()
    }

    /// Replacement start, if any.
    #[must_use]
    pub const fn start(&self) -> Option<NaiveDateTime> {
        self.start
    }

    /// Replacement end, if any.
    #[must_use]
    pub const fn end(&self) -> Option<NaiveDateTime> {
        self.end
    }

    /// Whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.start.is_none() && self.end.is_none()
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        Option<EventTitle>,
        Option<NaiveDateTime>,
        Option<NaiveDateTime>,
    ) {
        (self.title, self.start, self.end)
    }
}
