//! Response headers shared by the entity endpoints
//!
//! Alert headers tell clients an entity was created, updated or deleted.
//! Pagination headers carry the total count and `Link` relations.

use axum::http::{
    header::{InvalidHeaderName, LINK},
    HeaderMap, HeaderName, HeaderValue,
};

use crate::domain::pagination::Page;

/// Header describing a rejected client precondition
pub const FAILURE_HEADER: HeaderName = HeaderName::from_static("failure");

/// Header carrying the size of the whole result set
pub const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

/// Alert header names for one application
///
/// `X-{app}-alert` carries a readable message, `X-{app}-params` the
/// affected identifier.
#[derive(Debug, Clone)]
pub struct AlertHeaders {
    alert: HeaderName,
    params: HeaderName,
}

impl AlertHeaders {
    pub fn new(app_name: &str) -> Result<Self, InvalidHeaderName> {
        Ok(Self {
            alert: HeaderName::try_from(format!("X-{}-alert", app_name))?,
            params: HeaderName::try_from(format!("X-{}-params", app_name))?,
        })
    }

    pub fn alert_name(&self) -> &HeaderName {
        &self.alert
    }

    pub fn entity_created(&self, entity: &str, id: i64) -> HeaderMap {
        self.alert(
            format!("A new {} is created with identifier {}", entity, id),
            id,
        )
    }

    pub fn entity_updated(&self, entity: &str, id: i64) -> HeaderMap {
        self.alert(format!("A {} is updated with identifier {}", entity, id), id)
    }

    pub fn entity_deleted(&self, entity: &str, id: i64) -> HeaderMap {
        self.alert(format!("A {} is deleted with identifier {}", entity, id), id)
    }

    fn alert(&self, message: String, id: i64) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::try_from(message) {
            headers.insert(self.alert.clone(), value);
        }
        headers.insert(self.params.clone(), HeaderValue::from(id));
        headers
    }
}

/// `Link` header value with `next`, `prev`, `last` and `first` relations
///
/// `next` and `prev` only appear when such a page exists.
pub fn link_header<T>(page: &Page<T>, base_url: &str) -> String {
    let size = page.size();
    let link = |number: u64, rel: &str| {
        format!("<{}?page={}&size={}>; rel=\"{}\"", base_url, number, size, rel)
    };

    let mut links = Vec::with_capacity(4);
    if page.has_next() {
        links.push(link(u64::from(page.number()) + 1, "next"));
    }
    if page.has_previous() {
        links.push(link(u64::from(page.number()) - 1, "prev"));
    }
    links.push(link(page.total_pages().saturating_sub(1), "last"));
    links.push(link(0, "first"));

    links.join(",")
}

/// `X-Total-Count` and `Link` headers for a page
pub fn pagination_headers<T>(page: &Page<T>, base_url: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from(page.total_elements()));
    if let Ok(value) = HeaderValue::try_from(link_header(page, base_url)) {
        headers.insert(LINK, value);
    }
    headers
}
