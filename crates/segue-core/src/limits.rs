//! Default result list lengths.

/// Default number of recommendations for a text query.
pub const DEFAULT_RECOMMEND_LIMIT: usize = 10;

/// Default length of a raw similarity listing.
pub const DEFAULT_SIMILAR_LIMIT: usize = 20;

/// Default length of a diverse listing.
pub const DEFAULT_DIVERSE_LIMIT: usize = 10;
