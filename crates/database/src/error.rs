use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid database configuration: {0}")]
    ConnectionConfigError(String),

    #[error("Failed to connect to the database: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("{0}")]
    InvalidArgument(#[from] CoreError),

    #[error("Query failed: {0}")]
    QueryError(#[source] sqlx::Error),

    #[error("Failed to map row to album: {0}")]
    ScanError(#[source] sqlx::Error),

    #[error("No album found with id {0}")]
    NotFound(i64),
}
