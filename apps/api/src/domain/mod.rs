// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod job_offer;
pub mod pagination;
pub mod repositories;
