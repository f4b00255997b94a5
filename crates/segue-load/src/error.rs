//! Error types for catalog loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The track table is not valid CSV or lacks a required column.
    #[error("invalid track table {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A popularity value is missing or not a non-negative integer.
    #[error("invalid pos_count {value:?} at row {row}")]
    InvalidPopularity { row: usize, value: String },

    /// The embedding file is not a 2-D float array.
    #[error("invalid embedding file {}: {source}", path.display())]
    Npy {
        path: PathBuf,
        #[source]
        source: ndarray_npy::ReadNpyError,
    },

    /// The tracks and embeddings do not form a valid catalog.
    #[error("catalog error: {0}")]
    Catalog(#[from] segue_core::Error),
}

/// Convenience alias for loading results.
pub type LoadResult<T> = std::result::Result<T, LoadError>;
