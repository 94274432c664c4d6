//! Validated page requests.

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size served; larger requests are clamped to this value.
pub const MAX_PAGE_SIZE: u32 = 2000;

/// Errors raised while constructing a [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    /// The requested page size was zero.
    #[error("page size must be at least 1")]
    ZeroSize,
}

/// A zero-based page index paired with a page size.
///
/// ## Invariants
/// - `size` is within `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    number: u32,
    size: u32,
}

impl PageRequest {
    /// Build a request for page `number` holding `size` elements.
    ///
    /// Sizes above [`MAX_PAGE_SIZE`] are clamped rather than rejected.
    ///
    /// # Errors
    /// Returns [`PageRequestError::ZeroSize`] when `size` is zero.
    pub fn new(number: u32, size: u32) -> Result<Self, PageRequestError> {
        if size == 0 {
            return Err(PageRequestError::ZeroSize);
        }
        Ok(Self {
            number,
            size: size.min(MAX_PAGE_SIZE),
        })
    }

    /// Build a request from optional query parameters, applying defaults.
    ///
    /// # Errors
    /// Returns [`PageRequestError::ZeroSize`] when `size` is `Some(0)`.
    pub fn from_parts(number: Option<u32>, size: Option<u32>) -> Result<Self, PageRequestError> {
        Self::new(number.unwrap_or(0), size.unwrap_or(DEFAULT_PAGE_SIZE))
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Maximum number of elements on the page.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Number of elements preceding this page in the collection.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.number).saturating_mul(u64::from(self.size))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}
