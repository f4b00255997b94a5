pub mod embedding;
pub mod ids;
pub mod track;

pub use embedding::EmbeddingMatrix;
pub use ids::TrackId;
pub use track::{Track, TrackSummary};
