//! Chirpy Storage
//!
//! Single-file JSON record store for Chirpy users and chirps.
//!
//! # Architecture
//!
//! - **One Document**: every user, every chirp and both identity counters live in
//!   one JSON file, read at the start of each operation and rewritten in full at
//!   the end of each mutation
//! - **Serialized Writers**: a readers-writer lock spans the whole
//!   load → mutate → persist window so concurrent requests cannot lose updates
//! - **Vertical Slicing**: `chirps` and `users` own their own operations
//!
//! # Example
//!
//! ```rust,no_run
//! use chirpy_core::{AuthorFilter, SortOrder, UserId};
//! use chirpy_storage::{chirps, JsonStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = JsonStore::new("database.json");
//! store.initialize().await?;
//!
//! let chirp = chirps::create(&store, "hello", UserId::new(0)).await?;
//! let all = chirps::list(&store, AuthorFilter::All, SortOrder::Asc).await?;
//! assert_eq!(all, vec![chirp]);
//! # Ok(())
//! # }
//! ```

mod document;
mod error;
mod store;

// Vertical slices
pub mod chirps;
pub mod users;

pub use document::{ChirpTable, Document, UserTable};
pub use error::{Result, StorageError};
pub use store::JsonStore;
