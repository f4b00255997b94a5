//! Core catalog model for segue.
//!
//! This crate defines the track records, the embedding matrix, and the
//! read-only [`Catalog`] that aligns the two by row index and resolves
//! track identifiers to rows.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod limits;
pub mod model;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use model::{EmbeddingMatrix, Track, TrackId, TrackSummary};
