// JobOffer domain module
// Contains the job offer entity exchanged over the API and persisted by repositories

#![allow(clippy::module_inception)]

pub mod job_offer;

pub use job_offer::JobOffer;
