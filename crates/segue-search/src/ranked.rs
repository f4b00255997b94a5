use serde::{Deserialize, Serialize};

use segue_core::{Track, TrackId};

/// A catalog track with its similarity to a seed track.
///
/// Rank is implied by position in the returned list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    #[serde(rename = "track_id")]
    pub id: TrackId,

    #[serde(rename = "track")]
    pub title: String,

    pub artist: String,

    pub album: String,

    /// Cosine similarity to the seed, in `[-1, 1]`.
    pub similarity: f32,

    #[serde(rename = "pos_count")]
    pub popularity: u64,
}

impl RankedEntry {
    #[must_use]
    pub fn new(track: &Track, similarity: f32) -> Self {
        Self {
            id: track.id.clone(),
            title: track.title.clone(),
            artist: track.artist.clone(),
            album: track.album.clone(),
            similarity,
            popularity: track.popularity,
        }
    }
}

/// Log the head of a ranked list at debug level.
pub(crate) fn log_ranking(label: &str, seed: &Track, entries: &[RankedEntry]) {
    if entries.is_empty() || !log::log_enabled!(log::Level::Debug) {
        return;
    }

    log::debug!(
        "{} for {} - {}: {} tracks",
        label,
        seed.title,
        seed.artist,
        entries.len()
    );
    for (i, entry) in entries.iter().take(5).enumerate() {
        log::debug!(
            "  {:2}. {:<35} - {:<25} ({:5.1}% similar, {:>4} plays)",
            i + 1,
            entry.title,
            entry.artist,
            entry.similarity * 100.0,
            entry.popularity
        );
    }
    if entries.len() > 5 {
        log::debug!("  ... and {} more tracks", entries.len() - 5);
    }
}
