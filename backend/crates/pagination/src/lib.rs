//! Page-number pagination primitives shared by backend endpoints.
//!
//! [`PageRequest`] describes the slice a caller asks for, [`Page`] carries that
//! slice together with the collection totals, and [`PageLinks`] derives the
//! navigation hrefs (`self`, `first`, `prev`, `next`, `last`) mechanically from
//! the page index and the number of pages.
//!
//! ```
//! use pagination::{Page, PageLinks, PageRequest};
//! use url::Url;
//!
//! let request = PageRequest::new(0, 20).expect("valid request");
//! let page = Page::new((0..20).collect::<Vec<u32>>(), request, 50);
//! assert_eq!(page.total_pages(), 3);
//!
//! let base = Url::parse("https://example.test/events").expect("valid url");
//! let links = PageLinks::for_page(&base, &page);
//! assert_eq!(
//!     links.next.as_ref().map(Url::as_str),
//!     Some("https://example.test/events?page=1&size=20")
//! );
//! ```

mod links;
mod page;
mod request;

pub use links::PageLinks;
pub use page::{Page, PageMetadata};
pub use request::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, PageRequestError};
