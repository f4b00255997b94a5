//! Embedding matrix reader for NumPy `.npy` files.
//!
//! The file must hold a 2-D array of `f32` or `f64`; `f64` values are
//! narrowed to `f32`.

use std::path::Path;

use ndarray::Array2;
use ndarray_npy::ReadNpyExt;

use segue_core::EmbeddingMatrix;

use crate::error::{LoadError, LoadResult};

/// Read an embedding matrix from a `.npy` file.
pub fn read_embeddings(path: impl AsRef<Path>) -> LoadResult<EmbeddingMatrix> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let data = parse_npy(&bytes).map_err(|source| LoadError::Npy {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "Read {} x {} embedding matrix from {}",
        data.nrows(),
        data.ncols(),
        path.display()
    );
    Ok(EmbeddingMatrix::new(data))
}

#[allow(clippy::cast_possible_truncation)]
fn parse_npy(bytes: &[u8]) -> Result<Array2<f32>, ndarray_npy::ReadNpyError> {
    match Array2::<f32>::read_npy(bytes) {
        Ok(data) => Ok(data),
        Err(err) => match Array2::<f64>::read_npy(bytes) {
            Ok(data) => Ok(data.mapv(|x| x as f32)),
            Err(_) => Err(err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use ndarray_npy::write_npy;
    use tempfile::TempDir;

    #[test]
    fn test_read_f32() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emb.npy");
        write_npy(&path, &array![[1.0_f32, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();

        let matrix = read_embeddings(&path).unwrap();
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.dimension(), 2);
        assert_eq!(matrix.row(2).unwrap().to_vec(), vec![5.0, 6.0]);
    }

    #[test]
    fn test_read_f64_narrowed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emb64.npy");
        write_npy(&path, &array![[0.5_f64, -0.25]]).unwrap();

        let matrix = read_embeddings(&path).unwrap();
        assert_eq!(matrix.row(0).unwrap().to_vec(), vec![0.5_f32, -0.25]);
    }

    #[test]
    fn test_read_wrong_ndim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flat.npy");
        write_npy(&path, &array![1.0_f32, 2.0, 3.0]).unwrap();

        let err = read_embeddings(&path).unwrap_err();
        assert!(matches!(err, LoadError::Npy { .. }));
    }

    #[test]
    fn test_read_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.npy");
        std::fs::write(&path, b"not an array").unwrap();

        assert!(matches!(
            read_embeddings(&path).unwrap_err(),
            LoadError::Npy { .. }
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_embeddings("/nonexistent/segue/emb.npy").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
