use crate::store::AlbumStore;
use crate::DbError;
use async_trait::async_trait;
use core_types::{parse_album_id, Album, NewAlbum};
use sqlx::postgres::{PgPool, PgRow};
use sqlx::FromRow;

// `id` is read back as BIGINT so both SERIAL and BIGSERIAL keys decode into i64,
// and `price` as TEXT so any text-compatible column type works.
const SELECT_ALL: &str =
    "SELECT id::BIGINT AS id, title, artist, price::TEXT AS price FROM albums ORDER BY id";
const SELECT_BY_ID: &str =
    "SELECT id::BIGINT AS id, title, artist, price::TEXT AS price FROM albums WHERE id = $1";
const INSERT: &str =
    "INSERT INTO albums (title, artist, price) VALUES ($1, $2, $3) RETURNING id::BIGINT";
const UPDATE: &str = "UPDATE albums SET title = $1, artist = $2, price = $3 WHERE id = $4";
// The id arrives as raw path text; the database rejects anything non-numeric.
const DELETE: &str = "DELETE FROM albums WHERE id = CAST($1 AS BIGINT)";

/// The `DbRepository` provides the PostgreSQL-backed album store.
/// It encapsulates all SQL queries and row mapping.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn scan_album(row: &PgRow) -> Result<Album, DbError> {
    Album::from_row(row).map_err(DbError::ScanError)
}

#[async_trait]
impl AlbumStore for DbRepository {
    async fn list_all(&self) -> Result<Vec<Album>, DbError> {
        let rows = sqlx::query(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(DbError::QueryError)?;

        let albums = rows.iter().map(scan_album).collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = albums.len(), "Fetched all albums.");
        Ok(albums)
    }

    async fn get_by_id(&self, id: &str) -> Result<Album, DbError> {
        let id = parse_album_id(id)?;

        let row = sqlx::query(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DbError::QueryError)?
            .ok_or(DbError::NotFound(id))?;

        scan_album(&row)
    }

    async fn insert(&self, album: &NewAlbum) -> Result<i64, DbError> {
        let id = sqlx::query_scalar::<_, i64>(INSERT)
            .bind(&album.title)
            .bind(&album.artist)
            .bind(&album.price)
            .fetch_one(&self.pool)
            .await
            .map_err(DbError::QueryError)?;

        tracing::info!(album_id = id, title = %album.title, "Inserted album.");
        Ok(id)
    }

    async fn update(&self, album: &Album) -> Result<u64, DbError> {
        let result = sqlx::query(UPDATE)
            .bind(&album.title)
            .bind(&album.artist)
            .bind(&album.price)
            .bind(album.id)
            .execute(&self.pool)
            .await
            .map_err(DbError::QueryError)?;

        let rows_affected = result.rows_affected();
        tracing::info!(album_id = album.id, rows_affected, "Updated album.");
        Ok(rows_affected)
    }

    async fn delete(&self, id: &str) -> Result<u64, DbError> {
        let result = sqlx::query(DELETE)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DbError::QueryError)?;

        let rows_affected = result.rows_affected();
        tracing::info!(album_id = id, rows_affected, "Deleted album.");
        Ok(rows_affected)
    }
}
