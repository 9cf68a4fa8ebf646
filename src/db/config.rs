//! Store configuration from environment variables.

use std::env;

/// MongoDB connection configuration.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string, e.g. `mongodb://localhost:27017`.
    pub uri: String,
    /// Database name.
    pub database: String,
}

impl MongoConfig {
    /// Load the store configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` (required): store connection string
    /// - `DATABASE_NAME` (optional, default: `grande_charte`): database name
    ///
    /// # Errors
    /// Returns an error if `DATABASE_URL` is not set.
    pub fn from_env() -> Result<Self, String> {
        let uri = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL environment variable not set".to_string())?;
        let database = env::var("DATABASE_NAME").unwrap_or_else(|_| "grande_charte".to_string());
        Ok(Self { uri, database })
    }
}
