use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single row of the `albums` table.
///
/// On the wire the fields use PascalCase keys (`Id`, `Title`, `Artist`, `Price`);
/// lowercase keys are accepted on input. Missing fields decode as `0` or `""`.
/// `price` is text, both in transport and in storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase", default)]
pub struct Album {
    /// Assigned by the database on insert and never changed afterwards.
    #[serde(alias = "id", alias = "ID")]
    pub id: i64,
    #[serde(alias = "title")]
    pub title: String,
    #[serde(alias = "artist")]
    pub artist: String,
    #[serde(alias = "price")]
    pub price: String,
}

/// The payload accepted when creating an album.
///
/// There is no `id` field: any `Id` a client sends is ignored. Key handling
/// matches `Album`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NewAlbum {
    #[serde(alias = "title")]
    pub title: String,
    #[serde(alias = "artist")]
    pub artist: String,
    #[serde(alias = "price")]
    pub price: String,
}

impl Album {
    /// Builds the stored representation of `new` once the database has assigned `id`.
    pub fn from_new(id: i64, new: NewAlbum) -> Self {
        Self {
            id,
            title: new.title,
            artist: new.artist,
            price: new.price,
        }
    }
}

/// Parses an album id taken from a request path.
pub fn parse_album_id(raw: &str) -> Result<i64, CoreError> {
    raw.parse::<i64>()
        .map_err(|_| CoreError::InvalidId(raw.to_string()))
}
