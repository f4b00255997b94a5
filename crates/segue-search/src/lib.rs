//! Similarity search for segue.
//!
//! Resolves free-text queries to catalog tracks and ranks the rest of the
//! catalog against a seed track, either by cosine similarity or by the
//! "diverse" mode that favours popular tracks far from the seed.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod cosine;
pub mod diverse;
pub mod ranked;
pub mod recommend;
pub mod resolve;
pub mod similar;

pub use cosine::{cosine_similarity, similarities};
pub use diverse::{rank_diverse, DEFAULT_DIVERSE_LIMIT};
pub use ranked::RankedEntry;
pub use recommend::{Recommendation, Recommender, DEFAULT_RECOMMEND_LIMIT};
pub use resolve::{Resolution, TextResolver, SEARCH_LIMIT};
pub use similar::{rank_similar, DEFAULT_SIMILAR_LIMIT};

#[cfg(test)]
pub(crate) mod fixtures {
    use segue_core::{Catalog, EmbeddingMatrix, Track};

    /// Build a catalog from `(id, title, artist, popularity, embedding)` rows.
    pub fn catalog(rows: &[(&str, &str, &str, u64, &[f32])]) -> Catalog {
        let tracks = rows
            .iter()
            .map(|(id, title, artist, popularity, _)| {
                Track::new(*id, *title, *artist)
                    .with_album(format!("{title} (album)"))
                    .with_popularity(*popularity)
            })
            .collect();
        let embeddings = EmbeddingMatrix::from_rows(
            rows.iter().map(|(_, _, _, _, e)| e.to_vec()).collect(),
        )
        .unwrap();
        Catalog::new(tracks, embeddings).unwrap()
    }

    /// The three-song catalog used throughout the tests.
    ///
    /// Rows 0 and 2 share an embedding; row 1 is orthogonal to both.
    pub fn beatles() -> Catalog {
        catalog(&[
            ("1", "Yesterday", "Beatles", 50, &[1.0, 0.0]),
            ("2", "Yesterday Once More", "Carpenters", 30, &[0.0, 1.0]),
            ("3", "Hey Jude", "Beatles", 80, &[1.0, 0.0]),
        ])
    }
}
