//! Cosine similarity over catalog embeddings.

use ndarray::ArrayView1;
use segue_core::Catalog;

/// Cosine similarity of two vectors, clamped to `[-1, 1]`.
///
/// Returns `0.0` when either vector has zero norm, the lengths differ, or
/// the result is not a finite number.
pub fn cosine_similarity(a: ArrayView1<'_, f32>, b: ArrayView1<'_, f32>) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();
    normalize(a.dot(&b), norm_a, norm_b)
}

/// Similarity of the track at `row` to every track in the catalog, in row
/// order. The target row itself is included.
///
/// Returns `None` if `row` is out of range.
pub fn similarities(catalog: &Catalog, row: usize) -> Option<Vec<f32>> {
    let embeddings = catalog.embeddings();
    let target = embeddings.row(row)?;
    let target_norm = embeddings.norm(row)?;

    let dots = embeddings.dot(target);
    let scores = dots
        .iter()
        .zip(embeddings.norms().iter())
        .map(|(&dot, &norm)| normalize(dot, target_norm, norm))
        .collect();
    Some(scores)
}

fn normalize(dot: f32, norm_a: f32, norm_b: f32) -> f32 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let score = dot / (norm_a * norm_b);
    if score.is_finite() {
        score.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use ndarray::array;

    #[test]
    fn test_cosine_identical() {
        let a = array![0.3, 0.4, 0.5];
        assert!((cosine_similarity(a.view(), a.view()) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal() {
        let a = array![1.0, 0.0];
        let b = array![0.0, 1.0];
        assert!(cosine_similarity(a.view(), b.view()).abs() < f32::EPSILON);
    }

    #[test]
    fn test_cosine_opposite() {
        let a = array![1.0, 2.0];
        let b = array![-1.0, -2.0];
        assert!((cosine_similarity(a.view(), b.view()) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_zero_vector() {
        let a = array![0.0, 0.0];
        let b = array![1.0, 1.0];
        assert_eq!(cosine_similarity(a.view(), b.view()), 0.0);
        assert_eq!(cosine_similarity(a.view(), a.view()), 0.0);
    }

    #[test]
    fn test_cosine_length_mismatch() {
        let a = array![1.0, 0.0];
        let b = array![1.0];
        assert_eq!(cosine_similarity(a.view(), b.view()), 0.0);
    }

    #[test]
    fn test_cosine_non_finite_is_zero() {
        let nan = array![f32::NAN, 0.0];
        let inf = array![f32::INFINITY, 0.0];
        let one = array![1.0, 0.0];
        assert_eq!(cosine_similarity(nan.view(), one.view()), 0.0);
        assert_eq!(cosine_similarity(inf.view(), one.view()), 0.0);
    }

    #[test]
    fn test_cosine_overflow_is_zero() {
        // Finite inputs whose squared norm overflows to infinity.
        let big = array![f32::MAX, f32::MAX];
        let score = cosine_similarity(big.view(), big.view());
        assert!(score.is_finite());
        assert!((-1.0..=1.0).contains(&score));
    }

    #[test]
    fn test_similarities_out_of_range() {
        let catalog = fixtures::beatles();
        assert!(similarities(&catalog, 3).is_none());
    }

    #[test]
    fn test_similarities_self_is_one() {
        let catalog = fixtures::catalog(&[
            ("a", "A", "X", 0, &[0.2, 0.7, -0.1]),
            ("b", "B", "X", 0, &[1.5, -0.3, 0.9]),
            ("c", "C", "X", 0, &[-4.0, 2.0, 0.5]),
        ]);
        for row in 0..catalog.len() {
            let scores = similarities(&catalog, row).unwrap();
            assert!((scores[row] - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_similarities_symmetric() {
        let catalog = fixtures::catalog(&[
            ("a", "A", "X", 0, &[0.2, 0.7, -0.1]),
            ("b", "B", "X", 0, &[1.5, -0.3, 0.9]),
            ("c", "C", "X", 0, &[-4.0, 2.0, 0.5]),
            ("d", "D", "X", 0, &[0.0, 0.0, 0.0]),
        ]);
        let matrix: Vec<Vec<f32>> = (0..catalog.len())
            .map(|row| similarities(&catalog, row).unwrap())
            .collect();

        for (i, scores) in matrix.iter().enumerate() {
            for (j, score) in scores.iter().enumerate() {
                assert!((score - matrix[j][i]).abs() < 1e-6, "sim({i},{j})");
                assert!((-1.0..=1.0).contains(score));
            }
        }
    }

    #[test]
    fn test_similarities_match_pairwise() {
        let catalog = fixtures::beatles();
        let scores = similarities(&catalog, 0).unwrap();
        for (row, score) in scores.iter().enumerate() {
            let pairwise =
                cosine_similarity(catalog.embedding(0).unwrap(), catalog.embedding(row).unwrap());
            assert!((score - pairwise).abs() < 1e-6);
        }
    }

    #[test]
    fn test_similarities_zero_vector_row() {
        let catalog = fixtures::catalog(&[
            ("a", "A", "X", 0, &[0.0, 0.0]),
            ("b", "B", "X", 0, &[1.0, 0.0]),
        ]);
        assert_eq!(similarities(&catalog, 0).unwrap(), vec![0.0, 0.0]);
        assert_eq!(similarities(&catalog, 1).unwrap(), vec![0.0, 1.0]);
    }
}
