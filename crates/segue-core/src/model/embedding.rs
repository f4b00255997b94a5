use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::error::{Error, Result};

/// Dense `N × D` matrix of track embeddings, one row per catalog track.
///
/// Row L2 norms are computed once on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingMatrix {
    data: Array2<f32>,
    norms: Array1<f32>,
}

impl EmbeddingMatrix {
    #[must_use]
    pub fn new(data: Array2<f32>) -> Self {
        let norms = data.map_axis(Axis(1), |row| row.dot(&row).sqrt());
        Self { data, norms }
    }

    /// Build a matrix from equally sized rows.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let n = rows.len();
        let dim = rows.first().map_or(0, Vec::len);
        if let Some(pos) = rows.iter().position(|row| row.len() != dim) {
            return Err(Error::InvalidInput(format!(
                "embedding row {pos} has {} dimensions, expected {dim}",
                rows[pos].len()
            )));
        }

        let flat: Vec<f32> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((n, dim), flat)
            .map_err(|e| Error::InvalidInput(e.to_string()))?;
        Ok(Self::new(data))
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of dimensions per row.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.data.ncols()
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<ArrayView1<'_, f32>> {
        (index < self.rows()).then(|| self.data.row(index))
    }

    /// First row holding a NaN or infinite value, if any.
    #[must_use]
    pub fn first_non_finite_row(&self) -> Option<usize> {
        self.data
            .outer_iter()
            .position(|row| row.iter().any(|x| !x.is_finite()))
    }

    #[must_use]
    pub fn norm(&self, index: usize) -> Option<f32> {
        self.norms.get(index).copied()
    }

    #[must_use]
    pub fn norms(&self) -> ArrayView1<'_, f32> {
        self.norms.view()
    }

    #[must_use]
    pub fn view(&self) -> ArrayView2<'_, f32> {
        self.data.view()
    }

    /// Dot product of every row with `query`.
    ///
    /// `query` must have [`Self::dimension`] elements.
    #[must_use]
    pub fn dot(&self, query: ArrayView1<'_, f32>) -> Array1<f32> {
        self.data.dot(&query)
    }
}
