//! Persistence gateway for the document store.
//!
//! This module provides abstractions for database operations via the
//! Repository pattern, allowing storage backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (HTTP handlers, binary)              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! │  - typed record → collection mapping                    │
//! │  - diagnostic bounds                                    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────────────────────┐
//!     │      MongoRepository / LocalRepository       │
//!     │      (document store)   (in-memory)          │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! Use the service layer against a repository handle created by the
//! factory:
//!
//! ```ignore
//! use charte_backend::db::{services, MongoConfig, RepositoryFactory, RepositoryType};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MongoConfig::from_env()?;
//!     let repo = RepositoryFactory::create(RepositoryType::Mongo, Some(&config)).await?;
//!     services::health_check(repo.as_ref()).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

#[cfg(test)]
#[path = "services_tests.rs"]
mod services_tests;

pub use config::MongoConfig;
pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::{LocalRepository, MongoRepository};
pub use repository::{
    DocumentRepository, DocumentSchema, ErrorContext, RepositoryError, RepositoryResult,
};
pub use services::{create_document, health_check, list_collection_names};
