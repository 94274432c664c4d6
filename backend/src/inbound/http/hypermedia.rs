//! HAL and HAL-FORMS representations of events.
//!
//! Assembly is pure: given projections and the collection URL, it produces
//! the serializable representation without touching storage or the request.

use pagination::{Page, PageLinks, PageMetadata};
use serde::Serialize;
use url::Url;
use utoipa::ToSchema;

use crate::domain::{EventId, EventResponse, TITLE_MAX};
use crate::inbound::http::events_dto::EventBody;

/// Media type of HAL documents.
pub const HAL_JSON: &str = "application/hal+json";

/// Absolute URL of the events collection for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteContext {
    collection: Url,
}

impl RouteContext {
    /// Context rooted at `collection`. Any query string is ignored for item
    /// links but kept for paging links.
    pub fn new(collection: Url) -> Self {
        Self { collection }
    }

    /// `…/events/{id}`.
    pub fn item(&self, id: EventId) -> Url {
        let mut url = self.collection.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&id.to_string());
        }
        url
    }

    /// The collection URL including the request's query string.
    pub fn collection(&self) -> &Url {
        &self.collection
    }
}

/// A single HAL link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HalLink {
    #[schema(format = "uri")]
    pub href: String,
}

impl From<&Url> for HalLink {
    fn from(value: &Url) -> Self {
        Self {
            href: value.as_str().to_owned(),
        }
    }
}

/// Links carried by an event resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EventLinks {
    #[serde(rename = "self")]
    pub self_link: HalLink,
}

/// One input of a HAL-FORMS template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateProperty {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
}

impl TemplateProperty {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            max_length: None,
            input_type: None,
        }
    }

    fn date_time(name: &str) -> Self {
        Self {
            input_type: Some("datetime-local".to_owned()),
            ..Self::named(name)
        }
    }
}

/// A HAL-FORMS affordance targeting the resource's own URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HalTemplate {
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    pub properties: Vec<TemplateProperty>,
}

/// Affordances offered on a single event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EventTemplates {
    pub update: HalTemplate,
    pub delete: HalTemplate,
}

impl EventTemplates {
    fn for_event() -> Self {
        Self {
            update: HalTemplate {
                method: "PATCH".to_owned(),
                content_type: Some("application/json".to_owned()),
                properties: vec![
                    TemplateProperty {
                        max_length: Some(TITLE_MAX),
                        ..TemplateProperty::named("title")
                    },
                    TemplateProperty::date_time("start"),
                    TemplateProperty::date_time("end"),
                ],
            },
            delete: HalTemplate {
                method: "DELETE".to_owned(),
                content_type: None,
                properties: Vec::new(),
            },
        }
    }
}

/// HAL representation of one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EventResource {
    #[serde(flatten)]
    pub event: EventBody,
    #[serde(rename = "_links")]
    pub links: EventLinks,
    #[serde(rename = "_templates", skip_serializing_if = "Option::is_none")]
    pub templates: Option<EventTemplates>,
}

/// Embedded items of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EmbeddedEvents {
    pub events: Vec<EventResource>,
}

/// Navigation links of a collection page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CollectionLinks {
    #[serde(rename = "self")]
    pub self_link: HalLink,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<HalLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<HalLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<HalLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<HalLink>,
}

impl From<PageLinks> for CollectionLinks {
    fn from(links: PageLinks) -> Self {
        Self {
            self_link: HalLink::from(&links.current),
            first: links.first.as_ref().map(HalLink::from),
            prev: links.prev.as_ref().map(HalLink::from),
            next: links.next.as_ref().map(HalLink::from),
            last: links.last.as_ref().map(HalLink::from),
        }
    }
}

/// HAL representation of a page of events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EventCollection {
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedEvents,
    #[serde(rename = "_links")]
    pub links: CollectionLinks,
    #[schema(value_type = crate::inbound::http::schemas::PageMetadataSchema)]
    pub page: PageMetadata,
}

/// An event with its self link only, as returned by create and listings.
pub fn event_resource(event: EventResponse, context: &RouteContext) -> EventResource {
    let self_link = HalLink::from(&context.item(event.id));
    EventResource {
        event: EventBody::from(event),
        links: EventLinks { self_link },
        templates: None,
    }
}

/// An event with its self link plus `update` and `delete` affordances.
pub fn event_resource_with_affordances(
    event: EventResponse,
    context: &RouteContext,
) -> EventResource {
    EventResource {
        templates: Some(EventTemplates::for_event()),
        ..event_resource(event, context)
    }
}

/// A page of events with navigation links and page metadata.
///
/// ```
/// use events_api::inbound::http::hypermedia::{RouteContext, event_collection};
/// use pagination::{Page, PageRequest};
/// use url::Url;
///
/// let context = RouteContext::new(Url::parse("http://localhost/events").expect("url"));
/// let request = PageRequest::new(0, 20).expect("request");
/// let collection = event_collection(Page::new(Vec::new(), request, 0), &context);
/// assert!(collection.embedded.events.is_empty());
/// assert!(collection.links.next.is_none());
/// ```
pub fn event_collection(page: Page<EventResponse>, context: &RouteContext) -> EventCollection {
    let links = CollectionLinks::from(PageLinks::for_page(context.collection(), &page));
    let metadata = page.metadata();
    let events = page
        .into_content()
        .into_iter()
        .map(|event| event_resource(event, context))
        .collect();
    EventCollection {
        embedded: EmbeddedEvents { events },
        links,
        page: metadata,
    }
}
