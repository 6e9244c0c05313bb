use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::{postgres::PgPoolOptions, Connection, PgPool};
use std::time::Duration;

/// Establishes a connection pool to the PostgreSQL database.
///
/// The pool is created once per process and shared by every request handler;
/// safe concurrent use is the pool's responsibility.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    if settings.url.trim().is_empty() {
        return Err(DbError::ConnectionConfigError("database.url must be set.".to_string()));
    }

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect(&settings.url)
        .await
        .map_err(DbError::ConnectionError)?;

    Ok(pool)
}

/// Checks that the database is reachable by pinging one pooled connection.
pub async fn ping(pool: &PgPool) -> Result<(), DbError> {
    let mut conn = pool.acquire().await.map_err(DbError::ConnectionError)?;
    conn.ping().await.map_err(DbError::ConnectionError)?;
    Ok(())
}
