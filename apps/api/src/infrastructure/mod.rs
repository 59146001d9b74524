// Infrastructure layer module
// Storage adapters for the domain repository ports

pub mod repositories;
