use crate::store::AlbumStore;
use crate::DbError;
use async_trait::async_trait;
use core_types::{parse_album_id, Album, NewAlbum};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// An `AlbumStore` kept entirely in process memory.
///
/// It mirrors the PostgreSQL repository: ids come from a sequence that never
/// reuses a value, missing rows on update/delete report `0`, and a missing row
/// on lookup is `DbError::NotFound`. Used by `serve --memory` and by tests.
#[derive(Debug)]
pub struct MemoryAlbumStore {
    inner: RwLock<Table>,
}

#[derive(Debug)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Album>,
}

impl MemoryAlbumStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    /// Number of albums currently stored.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryAlbumStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AlbumStore for MemoryAlbumStore {
    async fn list_all(&self) -> Result<Vec<Album>, DbError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Album, DbError> {
        let id = parse_album_id(id)?;
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(DbError::NotFound(id))
    }

    async fn insert(&self, album: &NewAlbum) -> Result<i64, DbError> {
        let mut table = self.inner.write().await;
        let id = table.next_id;
        table.next_id += 1;
        table.rows.insert(id, Album::from_new(id, album.clone()));
        tracing::info!(album_id = id, title = %album.title, "Inserted album.");
        Ok(id)
    }

    async fn update(&self, album: &Album) -> Result<u64, DbError> {
        let mut table = self.inner.write().await;
        match table.rows.get_mut(&album.id) {
            Some(row) => {
                *row = album.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &str) -> Result<u64, DbError> {
        // Same acceptance as PostgreSQL's `CAST(.. AS BIGINT)`: surrounding
        // whitespace is allowed, anything non-numeric is an error.
        let id = parse_album_id(id.trim())?;
        let removed = self.inner.write().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}
