use crate::{error::AppError, AppState};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use core_types::{Album, NewAlbum};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct RowsUpdated {
    #[serde(rename = "rows Updated")]
    pub rows_updated: u64,
}

#[derive(Debug, Serialize)]
pub struct RowsDeleted {
    #[serde(rename = "rows Deleted")]
    pub rows_deleted: u64,
}

/// # GET /albums/all
pub async fn list_albums(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Album>>, AppError> {
    let albums = state.store.list_all().await?;
    Ok(Json(albums))
}

/// # GET /albums/:id
/// A missing album and a failed query both surface as 500.
pub async fn get_album(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Album>, AppError> {
    let album = state.store.get_by_id(&id).await?;
    Ok(Json(album))
}

/// # POST /albums
/// Responds with the id the database assigned, as a bare JSON number.
/// The body is parsed as JSON whatever `Content-Type` says.
pub async fn create_album(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<i64>), AppError> {
    let new_album: NewAlbum = serde_json::from_slice(&body)?;
    let id = state.store.insert(&new_album).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

/// # PUT /albums/edit
/// The body's `Id` selects the row. An unknown id answers 200 with a count of 0.
pub async fn update_album(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<RowsUpdated>, AppError> {
    let album: Album = serde_json::from_slice(&body)?;
    let rows_updated = state.store.update(&album).await?;
    Ok(Json(RowsUpdated { rows_updated }))
}

/// # DELETE /albums/delete/:id
pub async fn delete_album(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<RowsDeleted>, AppError> {
    let rows_deleted = state.store.delete(&id).await?;
    Ok(Json(RowsDeleted { rows_deleted }))
}
