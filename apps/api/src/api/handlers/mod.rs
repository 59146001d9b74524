// HTTP handlers, one module per endpoint group

pub mod health;
pub mod job_offers;
