use crate::error::DbError;
use async_trait::async_trait;
use core_types::{Album, NewAlbum};

/// The data access operations behind the album HTTP routes.
///
/// Handlers receive an implementation through their shared state, which keeps
/// them agnostic about whether they talk to PostgreSQL or to an in-process store.
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// Returns every album, ordered by id.
    async fn list_all(&self) -> Result<Vec<Album>, DbError>;

    /// Fetches one album. `id` must parse as an integer.
    async fn get_by_id(&self, id: &str) -> Result<Album, DbError>;

    /// Persists a new album and returns the id the store assigned to it.
    async fn insert(&self, album: &NewAlbum) -> Result<i64, DbError>;

    /// Overwrites every field except `id`. Returns the number of rows changed,
    /// which is `0` when no album has that id.
    async fn update(&self, album: &Album) -> Result<u64, DbError>;

    /// Removes an album. Returns the number of rows removed, `0` when no album
    /// has that id.
    async fn delete(&self, id: &str) -> Result<u64, DbError>;
}
