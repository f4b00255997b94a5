//! Track table reader.
//!
//! The table is a CSV file with a header row. The columns `track_id`,
//! `track`, `artist`, `album` and `pos_count` are required; any other
//! columns are ignored. Row order is preserved and defines the row index
//! shared with the embedding matrix.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use segue_core::Track;

use crate::error::{LoadError, LoadResult};

#[derive(Debug, Deserialize)]
struct TrackRow {
    track_id: String,
    track: String,
    artist: String,
    album: String,
    pos_count: String,
}

/// Read all tracks from a CSV file.
pub fn read_tracks(path: impl AsRef<Path>) -> LoadResult<Vec<Track>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(file, path)
}

/// Parse tracks from any CSV source.
pub fn parse_tracks(reader: impl Read) -> LoadResult<Vec<Track>> {
    parse(reader, Path::new("<reader>"))
}

fn parse(reader: impl Read, path: &Path) -> LoadResult<Vec<Track>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut tracks = Vec::new();
    for (row, record) in reader.deserialize::<TrackRow>().enumerate() {
        let record = record.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let popularity =
            parse_popularity(&record.pos_count).ok_or_else(|| LoadError::InvalidPopularity {
                row,
                value: record.pos_count.clone(),
            })?;

        tracks.push(
            Track::new(record.track_id, record.track, record.artist)
                .with_album(record.album)
                .with_popularity(popularity),
        );
    }

    log::debug!("Parsed {} track rows", tracks.len());
    Ok(tracks)
}

/// Accept plain integers and integral floats such as `"12.0"`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_popularity(value: &str) -> Option<u64> {
    let value = value.trim();
    if let Ok(count) = value.parse::<u64>() {
        return Some(count);
    }
    let float = value.parse::<f64>().ok()?;
    (float.is_finite() && float >= 0.0 && float.fract() == 0.0 && float <= u64::MAX as f64)
        .then_some(float as u64)
}
