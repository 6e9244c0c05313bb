//! # Album Database Crate
//!
//! The data access layer of the album service. Every operation is a single
//! parameterized SQL statement against the `albums` table.
//!
//! ## Public API
//!
//! - `connect` / `ping`: build the PostgreSQL connection pool and probe it once at startup.
//! - `AlbumStore`: the five album operations the HTTP layer depends on.
//! - `DbRepository`: the PostgreSQL implementation of `AlbumStore`.
//! - `MemoryAlbumStore`: an in-process implementation with the same semantics.
//! - `DbError`: the specific error types that can be returned from this crate.
//!
//! The table is expected to exist already:
//!
//! ```sql
//! CREATE TABLE albums (
//!     id     SERIAL PRIMARY KEY,
//!     title  TEXT NOT NULL,
//!     artist TEXT NOT NULL,
//!     price  TEXT NOT NULL
//! );
//! ```

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod memory;
pub mod repository;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, ping};
pub use error::DbError;
pub use memory::MemoryAlbumStore;
pub use repository::DbRepository;
pub use store::AlbumStore;
