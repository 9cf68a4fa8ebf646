//! Grande Charte HTTP server binary.
//!
//! Initializes logging, selects a repository backend, and serves the API.
//!
//! # Usage
//!
//! ```bash
//! # Run against MongoDB
//! DATABASE_URL=mongodb://localhost:27017 DATABASE_NAME=grande_charte \
//!   cargo run --bin charte-server
//!
//! # Run with the in-memory repository
//! REPOSITORY_TYPE=local cargo run --bin charte-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: server host (default: 0.0.0.0)
//! - `PORT`: server port (default: 8000)
//! - `DATABASE_URL`: store connection string
//! - `DATABASE_NAME`: store name (default: grande_charte)
//! - `NOTIFY_EMAIL`: operator address for the notification stub
//! - `REPOSITORY_TYPE`: `mongo` | `local` (default: inferred from DATABASE_URL)
//! - `REPOSITORY_CONFIG`: optional TOML file overriding the selection
//! - `RUST_LOG`: log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use charte_backend::db::{
    DocumentRepository, MongoConfig, RepositoryConfig, RepositoryFactory, RepositoryType,
};
use charte_backend::http::{create_router, AppState};
use charte_backend::notify::NoopNotifier;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Grande Charte backend");

    let repository = build_repository().await?;
    info!(database = repository.database_name(), "Repository initialized");

    // Create application state
    let state = AppState::new(repository, Arc::new(NoopNotifier::from_env()));

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Select and build the repository backend.
///
/// A `REPOSITORY_CONFIG` TOML file wins over environment detection; without
/// either, the in-memory repository keeps the backend serveable for local
/// development.
async fn build_repository() -> anyhow::Result<Arc<dyn DocumentRepository>> {
    if let Ok(path) = env::var("REPOSITORY_CONFIG") {
        let config = RepositoryConfig::from_file(&path)?;
        let repo_type = config.repository_type()?;
        let mongo_config = config.mongo_config();
        return Ok(RepositoryFactory::create(repo_type, Some(&mongo_config)).await?);
    }

    let repo_type = RepositoryType::from_env();
    let mongo_config = match repo_type {
        RepositoryType::Mongo => Some(MongoConfig::from_env().map_err(anyhow::Error::msg)?),
        RepositoryType::Local => None,
    };
    Ok(RepositoryFactory::create(repo_type, mongo_config.as_ref()).await?)
}
