//! Repository configuration file support.
//!
//! Reads the repository selection from a TOML file as an alternative to
//! environment variables:
//!
//! ```toml
//! [repository]
//! type = "mongo"
//!
//! [mongo]
//! uri = "mongodb://localhost:27017"
//! database = "grande_charte"
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::MongoConfig;
use super::factory::RepositoryType;
use super::repository::RepositoryError;

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub mongo: MongoSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// Mongo connection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MongoSettings {
    #[serde(default)]
    pub uri: String,
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_database() -> String {
    "grande_charte".to_string()
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// # Errors
    /// Returns a configuration error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;
        toml::from_str(&contents).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Resolve the configured repository type.
    ///
    /// # Errors
    /// Returns a configuration error for an unknown type string.
    pub fn repository_type(&self) -> Result<RepositoryType, RepositoryError> {
        RepositoryType::from_str(&self.repository.repo_type).map_err(RepositoryError::configuration)
    }

    /// Store configuration for the mongo backend.
    pub fn mongo_config(&self) -> MongoConfig {
        MongoConfig {
            uri: self.mongo.uri.clone(),
            database: self.mongo.database.clone(),
        }
    }
}
