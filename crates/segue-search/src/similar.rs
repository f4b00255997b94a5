//! Nearest-neighbour ranking by cosine similarity.

use segue_core::{Catalog, Error, Result};

use crate::cosine::similarities;
use crate::ranked::{log_ranking, RankedEntry};

pub use segue_core::limits::DEFAULT_SIMILAR_LIMIT;

/// Rank every other track by similarity to the track at `row`, most similar
/// first, and return at most `k` entries.
///
/// Equal scores keep catalog row order. The seed row is never included.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `row` is out of range.
pub fn rank_similar(catalog: &Catalog, row: usize, k: usize) -> Result<Vec<RankedEntry>> {
    let (Some(seed), Some(scores)) = (catalog.track(row), similarities(catalog, row)) else {
        return Err(Error::NotFound {
            entity: "track",
            id: format!("row {row}"),
        });
    };

    let mut order: Vec<usize> = (0..scores.len()).filter(|&i| i != row).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let ranked: Vec<RankedEntry> = order
        .into_iter()
        .take(k)
        .filter_map(|i| catalog.track(i).map(|track| RankedEntry::new(track, scores[i])))
        .collect();

    log_ranking("Similar recommendations", seed, &ranked);
    Ok(ranked)
}
