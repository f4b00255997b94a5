//! The read-only catalog store.
//!
//! A [`Catalog`] owns the track records and their embeddings and is the only
//! place where the two are correlated by row index. It is built once at
//! startup and never mutated, so it can be shared across threads behind an
//! `Arc` without locking.

use std::collections::HashMap;

use ndarray::ArrayView1;

use crate::error::{Error, Result};
use crate::model::{EmbeddingMatrix, Track, TrackId};

/// Immutable table of tracks aligned row-for-row with an embedding matrix.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<Track>,
    embeddings: EmbeddingMatrix,
    index: HashMap<TrackId, usize>,
}

impl Catalog {
    /// Build a catalog and its identifier index.
    ///
    /// Fails if the number of tracks and embedding rows differ, if a track
    /// has an empty id, title, or artist, or if an embedding holds a NaN or
    /// infinite value. When an id occurs more than once the last occurrence
    /// wins.
    pub fn new(tracks: Vec<Track>, embeddings: EmbeddingMatrix) -> Result<Self> {
        if tracks.len() != embeddings.rows() {
            return Err(Error::RowCountMismatch {
                records: tracks.len(),
                rows: embeddings.rows(),
            });
        }

        if let Some(row) = embeddings.first_non_finite_row() {
            return Err(Error::NonFiniteEmbedding { row });
        }

        let mut index = HashMap::with_capacity(tracks.len());
        for (row, track) in tracks.iter().enumerate() {
            check_required(row, track)?;
            if let Some(previous) = index.insert(track.id.clone(), row) {
                log::warn!(
                    "Duplicate track id {} at rows {} and {}; keeping row {}",
                    track.id,
                    previous,
                    row,
                    row
                );
            }
        }

        log::debug!(
            "Built catalog with {} tracks, {} embedding dimensions",
            tracks.len(),
            embeddings.dimension()
        );

        Ok(Self {
            tracks,
            embeddings,
            index,
        })
    }

    /// Number of tracks (and embedding rows).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Embedding dimension.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.embeddings.dimension()
    }

    #[must_use]
    pub fn track(&self, row: usize) -> Option<&Track> {
        self.tracks.get(row)
    }

    #[must_use]
    pub fn embedding(&self, row: usize) -> Option<ArrayView1<'_, f32>> {
        self.embeddings.row(row)
    }

    #[must_use]
    pub fn embeddings(&self) -> &EmbeddingMatrix {
        &self.embeddings
    }

    /// Row index of the track with the given id.
    #[must_use]
    pub fn row_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Look up a track by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Track> {
        self.row_of(id).and_then(|row| self.track(row))
    }

    /// Tracks in row order.
    pub fn tracks(&self) -> impl ExactSizeIterator<Item = &Track> {
        self.tracks.iter()
    }
}

fn check_required(row: usize, track: &Track) -> Result<()> {
    let missing = if track.id.is_empty() {
        Some("track_id")
    } else if track.title.is_empty() {
        Some("track")
    } else if track.artist.is_empty() {
        Some("artist")
    } else {
        None
    };

    match missing {
        Some(field) => Err(Error::MissingField { row, field }),
        None => Ok(()),
    }
}
