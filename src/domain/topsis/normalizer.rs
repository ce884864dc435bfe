//! Normalizer - Vector (Euclidean) normalization of criterion columns.

use super::{CriteriaMatrix, TopsisError};

/// Rescales each criterion column to unit Euclidean length.
pub struct Normalizer;

impl Normalizer {
    /// Divides every cell by the Euclidean norm of its column.
    ///
    /// # Errors
    ///
    /// Returns `TopsisError::ZeroColumn` if a column has zero norm, since
    /// its cells would all become undefined.
    pub fn normalize(matrix: &CriteriaMatrix) -> Result<CriteriaMatrix, TopsisError> {
        let norms = Self::column_norms(matrix);

        if let Some(column) = norms.iter().position(|&n| n == 0.0) {
            return Err(TopsisError::ZeroColumn {
                column: matrix.labels()[column].clone(),
            });
        }

        Ok(matrix.map_cells(|column, value| value / norms[column]))
    }

    /// Returns sqrt(sum of squares) for each column.
    pub fn column_norms(matrix: &CriteriaMatrix) -> Vec<f64> {
        (0..matrix.column_count())
            .map(|column| matrix.column(column).map(|v| v * v).sum::<f64>().sqrt())
            .collect()
    }
}
