use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{health, job_offers};
use super::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // JobOffer routes
        .route(
            "/api/jobOffers",
            post(job_offers::create_job_offer)
                .put(job_offers::update_job_offer)
                .get(job_offers::get_all_job_offers),
        )
        .route(
            "/api/jobOffers/:id",
            get(job_offers::get_job_offer).delete(job_offers::delete_job_offer),
        )
}
