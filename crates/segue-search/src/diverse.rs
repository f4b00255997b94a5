//! "Diverse" ranking: popular tracks that sound unlike the seed.
//!
//! The catalog is ordered by ascending similarity to the seed, the least
//! similar half is kept, and that half is re-ranked by popularity. This
//! counterbalances pure nearest-neighbour recommendations.

use segue_core::Catalog;

use crate::cosine::similarities;
use crate::ranked::{log_ranking, RankedEntry};

pub use segue_core::limits::DEFAULT_DIVERSE_LIMIT;

/// Rank the least similar half of the catalog by popularity, most popular
/// first, and return at most `k` entries.
///
/// The half holds `floor(N / 2)` rows, so with an odd catalog size the
/// middle row is left out. Ties in popularity keep ascending-similarity
/// order. Returns an empty list if `row` is out of range.
///
/// A seed with a zero-norm embedding scores `0.0` against every row, so the
/// half is taken in plain row order and may contain the seed itself.
pub fn rank_diverse(catalog: &Catalog, row: usize, k: usize) -> Vec<RankedEntry> {
    let (Some(seed), Some(scores)) = (catalog.track(row), similarities(catalog, row)) else {
        log::debug!("No diverse ranking for out-of-range row {}", row);
        return Vec::new();
    };

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));
    order.truncate(scores.len() / 2);

    let mut candidates: Vec<RankedEntry> = order
        .into_iter()
        .filter_map(|i| catalog.track(i).map(|track| RankedEntry::new(track, scores[i])))
        .collect();
    candidates.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    candidates.truncate(k);

    log_ranking("Diverse recommendations", seed, &candidates);
    candidates
}
