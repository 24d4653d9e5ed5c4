//! Chirpy Core
//!
//! Domain types and error handling shared by the Chirpy storage layer and server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Chirp` and their integer identities
//! - **Query Types**: `AuthorFilter`, `SortOrder`
//! - **Error Handling**: the closed `ChirpyError` taxonomy and `Rejection` reasons
//!
//! # Example
//!
//! ```rust
//! use chirpy_core::{AuthorFilter, Chirp, ChirpId, UserId};
//!
//! let chirp = Chirp::new(ChirpId::new(0), "hello", UserId::new(7));
//! assert!(AuthorFilter::Author(UserId::new(7)).matches(&chirp));
//! assert!(AuthorFilter::All.matches(&chirp));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

pub use error::{ChirpyError, Rejection, Result};
pub use types::{AuthorFilter, Chirp, ChirpId, SortOrder, User, UserId};
