// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_job_offer_repository;
pub mod postgres_job_offer_repository;

pub use in_memory_job_offer_repository::InMemoryJobOfferRepository;
pub use postgres_job_offer_repository::PostgresJobOfferRepository;
