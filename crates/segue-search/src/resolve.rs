//! Free-text resolution of song queries to catalog tracks.
//!
//! Matching is case-insensitive substring containment over a linear scan of
//! the catalog. Titles and artists are case-folded once when the resolver is
//! built; no inverted index is kept.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use segue_core::{Catalog, TrackId, TrackSummary};

/// Maximum number of results returned by [`TextResolver::search`].
pub const SEARCH_LIMIT: usize = 20;

/// Outcome of resolving a title (and optional artist) query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The best match, if anything matched.
    pub primary: Option<TrackId>,

    /// Every matching track in catalog row order.
    pub candidates: Vec<TrackSummary>,
}

impl Resolution {
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.candidates.len() > 1
    }
}

#[derive(Debug)]
struct FoldedText {
    title: String,
    artist: String,
}

/// Resolves text queries against a shared catalog.
#[derive(Debug)]
pub struct TextResolver {
    catalog: Arc<Catalog>,
    folded: Vec<FoldedText>,
}

impl TextResolver {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let folded = catalog
            .tracks()
            .map(|track| FoldedText {
                title: track.title.to_lowercase(),
                artist: track.artist.to_lowercase(),
            })
            .collect();
        Self { catalog, folded }
    }

    /// Resolve a title query, optionally narrowed by artist.
    ///
    /// When several tracks match, the first whose title equals the query
    /// (ignoring case) is preferred; otherwise the first match in row order.
    pub fn resolve(&self, title: &str, artist: Option<&str>) -> Resolution {
        let needle = title.to_lowercase();
        let artist = artist.map(str::to_lowercase);

        let rows: Vec<usize> = self
            .folded
            .iter()
            .enumerate()
            .filter(|(_, text)| text.title.contains(&needle))
            .filter(|(_, text)| {
                artist
                    .as_deref()
                    .map_or(true, |artist| text.artist.contains(artist))
            })
            .map(|(row, _)| row)
            .collect();

        let primary_row = match rows.as_slice() {
            [] => return Resolution::default(),
            [only] => *only,
            [first, ..] => rows
                .iter()
                .copied()
                .find(|&row| self.folded[row].title == needle)
                .unwrap_or(*first),
        };

        let resolution = Resolution {
            primary: self.catalog.track(primary_row).map(|t| t.id.clone()),
            candidates: self.summaries(rows),
        };
        log::debug!(
            "Resolved '{}' to {:?} ({} candidates)",
            title,
            resolution.primary,
            resolution.candidates.len()
        );
        resolution
    }

    /// Browse the catalog by title or artist.
    ///
    /// Title matches come first, then artist-only matches, each in row order.
    /// Results are unique by id and capped at [`SEARCH_LIMIT`].
    pub fn search(&self, query: &str) -> Vec<TrackSummary> {
        let query = query.to_lowercase();

        let title_rows = self
            .folded
            .iter()
            .enumerate()
            .filter(|(_, text)| text.title.contains(&query));
        let artist_rows = self
            .folded
            .iter()
            .enumerate()
            .filter(|(_, text)| !text.title.contains(&query) && text.artist.contains(&query));

        let mut seen = HashSet::new();
        let rows: Vec<usize> = title_rows
            .chain(artist_rows)
            .map(|(row, _)| row)
            .filter(|&row| {
                self.catalog
                    .track(row)
                    .is_some_and(|track| seen.insert(track.id.clone()))
            })
            .take(SEARCH_LIMIT)
            .collect();

        self.summaries(rows)
    }

    fn summaries(&self, rows: Vec<usize>) -> Vec<TrackSummary> {
        rows.into_iter()
            .filter_map(|row| self.catalog.track(row).map(TrackSummary::from))
            .collect()
    }
}
