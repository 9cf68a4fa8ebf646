//! Repository factory for dependency injection.
//!
//! Creates and configures repository instances based on runtime
//! configuration; the composition root owns the resulting handle and
//! injects it into the HTTP state.

use std::str::FromStr;
use std::sync::Arc;

use super::config::MongoConfig;
use super::repositories::{LocalRepository, MongoRepository};
use super::repository::{DocumentRepository, RepositoryError, RepositoryResult};

/// Repository backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// MongoDB implementation
    Mongo,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get the repository type from the environment.
    ///
    /// Reads `REPOSITORY_TYPE`. Defaults to Mongo when a `DATABASE_URL` is
    /// present, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var("DATABASE_URL").is_ok() {
            Self::Mongo
        } else {
            Self::Local
        }
    }
}

/// Factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Errors
    /// The mongo backend requires a [`MongoConfig`]; fails with a
    /// configuration error when it is missing, or a connection error when
    /// the connection string cannot be parsed.
    pub async fn create(
        repo_type: RepositoryType,
        mongo_config: Option<&MongoConfig>,
    ) -> RepositoryResult<Arc<dyn DocumentRepository>> {
        match repo_type {
            RepositoryType::Mongo => {
                let config = mongo_config.ok_or_else(|| {
                    RepositoryError::configuration("Mongo repository requires MongoConfig")
                })?;
                let repo = MongoRepository::connect(config).await?;
                Ok(Arc::new(repo))
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create an in-memory repository.
    pub fn create_local() -> Arc<dyn DocumentRepository> {
        Arc::new(LocalRepository::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_type_from_str() {
        assert_eq!("mongo".parse::<RepositoryType>(), Ok(RepositoryType::Mongo));
        assert_eq!(
            "MongoDB".parse::<RepositoryType>(),
            Ok(RepositoryType::Mongo)
        );
        assert_eq!("local".parse::<RepositoryType>(), Ok(RepositoryType::Local));
        assert!("banana".parse::<RepositoryType>().is_err());
    }

    #[tokio::test]
    async fn test_mongo_without_config_is_a_configuration_error() {
        let result = RepositoryFactory::create(RepositoryType::Mongo, None).await;
        assert!(matches!(
            result,
            Err(RepositoryError::ConfigurationError { .. })
        ));
    }

    #[tokio::test]
    async fn test_create_local_yields_a_working_repository() {
        let repo = RepositoryFactory::create(RepositoryType::Local, None)
            .await
            .unwrap();
        assert!(repo.ping().await.is_ok());
        assert_eq!(repo.database_name(), "local");
    }
}
