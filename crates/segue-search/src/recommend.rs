//! Query-level operations composed from the resolver and the rankers.
//!
//! A [`Recommender`] is built once around a loaded [`Catalog`] and can then
//! be shared by any number of callers; every call recomputes its ranking from
//! scratch.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use segue_core::{Catalog, Error, Result, TrackSummary};

use crate::diverse::rank_diverse;
use crate::ranked::RankedEntry;
use crate::resolve::{Resolution, TextResolver};
use crate::similar::rank_similar;

pub use segue_core::limits::DEFAULT_RECOMMEND_LIMIT;

/// Result of [`Recommender::recommend`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recommendation {
    /// The query resolved to a track and was ranked against the catalog.
    Found {
        #[serde(rename = "original_song")]
        original: TrackSummary,

        recommendations: Vec<RankedEntry>,

        /// All resolver matches, only when there was more than one.
        #[serde(rename = "matches")]
        candidates: Vec<TrackSummary>,
    },

    /// Nothing usable matched the query.
    NoMatch {
        error: String,

        #[serde(rename = "matches")]
        candidates: Vec<TrackSummary>,
    },
}

impl Recommendation {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    #[must_use]
    pub fn recommendations(&self) -> &[RankedEntry] {
        match self {
            Self::Found {
                recommendations, ..
            } => recommendations,
            Self::NoMatch { .. } => &[],
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[TrackSummary] {
        match self {
            Self::Found { candidates, .. } | Self::NoMatch { candidates, .. } => candidates,
        }
    }
}

/// Entry point for resolving and ranking queries against one catalog.
#[derive(Debug)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    resolver: TextResolver,
}

impl Recommender {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let resolver = TextResolver::new(Arc::clone(&catalog));
        Self { catalog, resolver }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve a title (and optional artist) to a catalog track.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the title is empty.
    pub fn resolve(&self, title: &str, artist: Option<&str>) -> Result<Resolution> {
        let title = required("title", title)?;
        Ok(self.resolver.resolve(title, optional(artist)))
    }

    /// Resolve a text query and rank the catalog by similarity to the match.
    ///
    /// An unresolved query is reported as [`Recommendation::NoMatch`], not as
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the title is empty.
    pub fn recommend(
        &self,
        title: &str,
        artist: Option<&str>,
        k: usize,
    ) -> Result<Recommendation> {
        let resolution = self.resolve(title, artist)?;
        let Resolution {
            primary,
            candidates,
        } = resolution;

        let Some(id) = primary else {
            log::info!("No track matches '{}'", title.trim());
            return Ok(Recommendation::NoMatch {
                error: format!("no track matches '{}'", title.trim()),
                candidates: Vec::new(),
            });
        };

        let ranked = self
            .catalog
            .row_of(id.as_str())
            .ok_or_else(|| Error::NotFound {
                entity: "track",
                id: id.to_string(),
            })
            .and_then(|row| rank_similar(&self.catalog, row, k).map(|ranked| (row, ranked)));

        match ranked {
            Ok((row, recommendations)) => {
                let original = self
                    .catalog
                    .track(row)
                    .map(TrackSummary::from)
                    .ok_or_else(|| Error::NotFound {
                        entity: "track",
                        id: id.to_string(),
                    })?;
                let candidates = if candidates.len() > 1 {
                    candidates
                } else {
                    Vec::new()
                };
                Ok(Recommendation::Found {
                    original,
                    recommendations,
                    candidates,
                })
            }
            Err(e) if e.is_not_found() => {
                log::warn!("Resolved track {} has no embedding: {}", id, e);
                Ok(Recommendation::NoMatch {
                    error: format!("no embedding found for track {id}"),
                    candidates,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Rank the catalog by similarity to the track with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an empty id and
    /// [`Error::NotFound`] for an unknown one.
    pub fn similar(&self, id: &str, k: usize) -> Result<Vec<RankedEntry>> {
        let id = required("track id", id)?;
        let row = self.catalog.row_of(id).ok_or_else(|| Error::NotFound {
            entity: "track",
            id: id.to_string(),
        })?;
        rank_similar(&self.catalog, row, k)
    }

    /// Popular tracks far from the track with the given id.
    ///
    /// An unknown id yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an empty id.
    pub fn diverse_recommend(&self, id: &str, k: usize) -> Result<Vec<RankedEntry>> {
        let id = required("track id", id)?;
        let Some(row) = self.catalog.row_of(id) else {
            log::debug!("Unknown track {} for diverse recommendations", id);
            return Ok(Vec::new());
        };
        Ok(rank_diverse(&self.catalog, row, k))
    }

    /// Browse the catalog by title or artist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the query is empty.
    pub fn search(&self, query: &str) -> Result<Vec<TrackSummary>> {
        let query = required("query", query)?;
        Ok(self.resolver.search(query))
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(value)
}

fn optional(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
