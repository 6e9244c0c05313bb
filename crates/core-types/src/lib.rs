pub mod album;
pub mod error;

// Re-export the core types to provide a clean public API.
pub use album::{parse_album_id, Album, NewAlbum};
pub use error::CoreError;
