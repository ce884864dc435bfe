//! Weighter - Applies criterion weights to the normalized matrix.

use super::{CriteriaMatrix, TopsisError, WeightVector};

pub struct Weighter;

impl Weighter {
    /// Multiplies column j by `weights[j]`.
    pub fn weight(
        normalized: &CriteriaMatrix,
        weights: &WeightVector,
    ) -> Result<CriteriaMatrix, TopsisError> {
        if weights.len() != normalized.column_count() {
            return Err(TopsisError::CriteriaCountMismatch {
                count: weights.len(),
                criteria: normalized.column_count(),
            });
        }
        let weights = weights.as_slice();
        Ok(normalized.map_cells(|column, value| value * weights[column]))
    }
}
