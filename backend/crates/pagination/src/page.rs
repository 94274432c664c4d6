//! Page envelopes.

use serde::Serialize;

use crate::PageRequest;

/// One slice of a larger collection plus the totals describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    request: PageRequest,
    total_elements: u64,
}

/// Aggregate page metadata as exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Requested page size.
    pub size: u32,
    /// Number of elements in the whole collection.
    pub total_elements: u64,
    /// Number of pages the collection spans at this page size.
    pub total_pages: u64,
    /// Zero-based index of this page.
    pub number: u32,
}

impl<T> Page<T> {
    /// Wrap `content` fetched for `request` out of `total_elements` items.
    #[must_use]
    pub const fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            request,
            total_elements,
        }
    }

    /// Elements on this page.
    #[must_use]
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Consume the page and return its elements.
    #[must_use]
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.request.number()
    }

    /// Requested page size.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.request.size()
    }

    /// Number of elements actually on this page.
    #[must_use]
    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    /// Number of elements in the whole collection.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Number of pages the collection spans; zero for an empty collection.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(u64::from(self.request.size()))
    }

    /// Whether a page precedes this one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.request.number() > 0
    }

    /// Whether a page follows this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.request.number()).saturating_add(1) < self.total_pages()
    }

    /// Convert each element, keeping the paging information.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            request: self.request,
            total_elements: self.total_elements,
        }
    }

    /// Client-facing summary of this page.
    #[must_use]
    pub fn metadata(&self) -> PageMetadata {
        PageMetadata {
            size: self.size(),
            total_elements: self.total_elements,
            total_pages: self.total_pages(),
            number: self.number(),
        }
    }
}
