use serde::{Deserialize, Serialize};

use crate::model::ids::TrackId;

/// A song in the catalog.
///
/// Serialized field names follow the catalog source columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    #[serde(rename = "track_id")]
    pub id: TrackId,

    #[serde(rename = "track")]
    pub title: String,

    pub artist: String,

    pub album: String,

    /// How often the track was requested or played.
    #[serde(rename = "pos_count")]
    pub popularity: u64,
}

impl Track {
    #[must_use]
    pub fn new(
        id: impl Into<TrackId>,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            album: String::new(),
            popularity: 0,
        }
    }

    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    #[must_use]
    pub fn with_popularity(mut self, popularity: u64) -> Self {
        self.popularity = popularity;
        self
    }

    #[must_use]
    pub fn summary(&self) -> TrackSummary {
        TrackSummary::from(self)
    }
}

/// The identifying fields of a track, without ranking signals.
///
/// Used for resolver candidates and search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSummary {
    #[serde(rename = "track_id")]
    pub id: TrackId,

    #[serde(rename = "track")]
    pub title: String,

    pub artist: String,

    pub album: String,
}

impl From<&Track> for TrackSummary {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id.clone(),
            title: track.title.clone(),
            artist: track.artist.clone(),
            album: track.album.clone(),
        }
    }
}
