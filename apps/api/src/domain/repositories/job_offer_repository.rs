use async_trait::async_trait;
use thiserror::Error;

use crate::domain::job_offer::JobOffer;
use crate::domain::pagination::{Page, PageRequest};

/// Errors raised by JobOffer storage
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Repository trait for JobOffer entities
///
/// Defines the contract for persisting and retrieving job offers.
/// Storage owns identifier assignment and all consistency guarantees.
#[async_trait]
pub trait JobOfferRepository: Send + Sync {
    /// Save a job offer
    ///
    /// Without an id the offer is inserted and gets a new id. With an id it
    /// replaces the stored offer; an id unknown to storage is inserted as a
    /// new offer with a storage-assigned id.
    async fn save(&self, offer: JobOffer) -> Result<JobOffer, RepositoryError>;

    /// Find one page of job offers
    async fn find_all(&self, page: &PageRequest) -> Result<Page<JobOffer>, RepositoryError>;

    /// Find a job offer by its ID
    async fn find_one(&self, id: i64) -> Result<Option<JobOffer>, RepositoryError>;

    /// Delete a job offer by ID, succeeding whether or not it exists
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
