use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),

    #[error("failed to apply migrations")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("failed to read fixtures from {path}")]
    FixtureIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed fixture data")]
    FixtureFormat(#[from] serde_json::Error),

    #[error("invalid fixture data: {0}")]
    FixtureIntegrity(String),
}
