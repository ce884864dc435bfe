//! Distance Scorer - Separation measures and relative closeness.

use serde::Serialize;

use super::{CriteriaMatrix, IdealSolution, TopsisError};

/// Per-row Euclidean distances to the two ideal solutions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distances {
    pub to_best: Vec<f64>,
    pub to_worst: Vec<f64>,
}

pub struct DistanceScorer;

impl DistanceScorer {
    /// Computes each row's Euclidean distance to ideal-best and ideal-worst.
    pub fn distances(weighted: &CriteriaMatrix, ideal: &IdealSolution) -> Distances {
        let (to_best, to_worst) = weighted
            .iter_rows()
            .map(|row| (euclidean(row, &ideal.best), euclidean(row, &ideal.worst)))
            .unzip();

        Distances { to_best, to_worst }
    }

    /// Computes the closeness score `d_worst / (d_best + d_worst)` per row.
    ///
    /// # Errors
    ///
    /// Returns `TopsisError::UndefinedScore` for the first row whose two
    /// distances are both zero.
    pub fn score(distances: &Distances) -> Result<Vec<f64>, TopsisError> {
        distances
            .to_best
            .iter()
            .zip(&distances.to_worst)
            .enumerate()
            .map(|(row, (&best, &worst))| {
                let total = best + worst;
                if total == 0.0 || !total.is_finite() {
                    Err(TopsisError::UndefinedScore { row })
                } else {
                    Ok(worst / total)
                }
            })
            .collect()
    }
}

fn euclidean(row: &[f64], reference: &[f64]) -> f64 {
    row.iter()
        .zip(reference)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted() -> CriteriaMatrix {
        CriteriaMatrix::from_rows(
            vec!["x".to_string(), "y".to_string()],
            vec![vec![0.0, 0.0], vec![3.0, 4.0], vec![1.5, 2.0]],
        )
        .unwrap()
    }

    fn ideal() -> IdealSolution {
        IdealSolution {
            best: vec![3.0, 4.0],
            worst: vec![0.0, 0.0],
        }
    }

    #[test]
    fn distances_are_euclidean() {
        let d = DistanceScorer::distances(&weighted(), &ideal());
        assert_eq!(d.to_best, vec![5.0, 0.0, 2.5]);
        assert_eq!(d.to_worst, vec![0.0, 5.0, 2.5]);
    }

    #[test]
    fn closeness_spans_zero_to_one() {
        let d = DistanceScorer::distances(&weighted(), &ideal());
        let scores = DistanceScorer::score(&d).unwrap();
        assert_eq!(scores, vec![0.0, 1.0, 0.5]);
    }

    #[test]
    fn zero_total_distance_is_undefined() {
        let d = Distances {
            to_best: vec![1.0, 0.0],
            to_worst: vec![1.0, 0.0],
        };
        assert_eq!(
            DistanceScorer::score(&d),
            Err(TopsisError::UndefinedScore { row: 1 })
        );
    }
}
