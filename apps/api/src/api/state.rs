use std::sync::Arc;

use crate::api::headers::AlertHeaders;
use crate::domain::repositories::JobOfferRepository;

/// Shared state handed to every handler
///
/// The repository is passed in by whoever builds the router, so the same
/// handlers run against PostgreSQL or the in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub job_offers: Arc<dyn JobOfferRepository>,
    pub alerts: AlertHeaders,
}

impl AppState {
    pub fn new(job_offers: Arc<dyn JobOfferRepository>, alerts: AlertHeaders) -> Self {
        Self { job_offers, alerts }
    }
}
