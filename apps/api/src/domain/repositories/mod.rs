// Repository contracts (ports)
// Implemented by adapters in the infrastructure layer

pub mod job_offer_repository;

pub use job_offer_repository::{JobOfferRepository, RepositoryError};
