use std::sync::Arc;

use axum::http::header::InvalidHeaderName;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use jobvacancy_api::api::{self, headers::AlertHeaders, AppState};
use jobvacancy_api::config::{Config, ConfigError, StorageBackend};
use jobvacancy_api::domain::repositories::JobOfferRepository;
use jobvacancy_api::infrastructure::repositories::{
    InMemoryJobOfferRepository, PostgresJobOfferRepository,
};

#[derive(Debug, Error)]
enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid APP_NAME for alert headers: {0}")]
    AppName(#[from] InvalidHeaderName),

    #[error("Failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jobvacancy_api=debug,tower_http=info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;
    let alerts = AlertHeaders::new(&config.app_name)?;

    let job_offers: Arc<dyn JobOfferRepository> = match config.storage_backend {
        StorageBackend::Postgres => {
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            tracing::info!("Database connected successfully");

            Arc::new(PostgresJobOfferRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, job offers are lost on restart");
            Arc::new(InMemoryJobOfferRepository::new())
        }
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppState::new(job_offers, alerts));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
