// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod headers;
pub mod routes;
pub mod state;

pub use routes::routes;
pub use state::AppState;
