//! Job Vacancy API Library
//!
//! CRUD endpoints for job offers over a pluggable repository, plus the
//! PostgreSQL and in-memory repository implementations.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
