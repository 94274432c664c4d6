//! Navigation links derived from a page.

use url::Url;

use crate::Page;

const PAGE_PARAM: &str = "page";
const SIZE_PARAM: &str = "size";

/// Absolute hrefs for moving around a paged collection.
///
/// `first` and `last` are only present when the collection spans more than
/// the current page; `prev` and `next` only when such a page exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    /// The page that was requested.
    pub current: Url,
    /// The first page.
    pub first: Option<Url>,
    /// The preceding page.
    pub prev: Option<Url>,
    /// The following page.
    pub next: Option<Url>,
    /// The last page.
    pub last: Option<Url>,
}

impl PageLinks {
    /// Derive links for `page` relative to the collection URL `base`.
    ///
    /// Query parameters already on `base` are kept, except `page` and `size`
    /// which are rewritten for each link.
    #[must_use]
    pub fn for_page<T>(base: &Url, page: &Page<T>) -> Self {
        let size = page.size();
        let href = |number: u32| page_href(base, number, size);
        let navigable = page.has_previous() || page.has_next();
        let last_index = u32::try_from(page.total_pages().saturating_sub(1)).unwrap_or(u32::MAX);

        Self {
            current: href(page.number()),
            first: navigable.then(|| href(0)),
            prev: page
                .has_previous()
                .then(|| href(page.number().saturating_sub(1))),
            next: page
                .has_next()
                .then(|| href(page.number().saturating_add(1))),
            last: navigable.then(|| href(last_index)),
        }
    }
}

fn page_href(base: &Url, number: u32, size: u32) -> Url {
    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != PAGE_PARAM && key != SIZE_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .append_pair(PAGE_PARAM, &number.to_string())
        .append_pair(SIZE_PARAM, &size.to_string());
    url
}
