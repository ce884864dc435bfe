//! Ideal Solver - Ideal-best and ideal-worst reference points.

use serde::Serialize;

use super::{CriteriaMatrix, Impact, ImpactVector, TopsisError};

/// The two reference vectors a row is measured against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdealSolution {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

pub struct IdealSolver;

impl IdealSolver {
    /// Derives the ideal-best and ideal-worst vectors column by column.
    ///
    /// For a Benefit criterion the best value is the column maximum and the
    /// worst is the minimum; a Cost criterion swaps them.
    ///
    /// # Errors
    ///
    /// - `EmptyMatrix` if there are no rows
    /// - `CriteriaCountMismatch` if impacts and columns disagree
    pub fn ideal_solutions(
        weighted: &CriteriaMatrix,
        impacts: &ImpactVector,
    ) -> Result<IdealSolution, TopsisError> {
        if weighted.row_count() == 0 {
            return Err(TopsisError::EmptyMatrix);
        }
        if impacts.len() != weighted.column_count() {
            return Err(TopsisError::CriteriaCountMismatch {
                count: impacts.len(),
                criteria: weighted.column_count(),
            });
        }

        let mut best = Vec::with_capacity(impacts.len());
        let mut worst = Vec::with_capacity(impacts.len());

        for (column, impact) in impacts.as_slice().iter().enumerate() {
            let max = weighted.column(column).fold(f64::NEG_INFINITY, f64::max);
            let min = weighted.column(column).fold(f64::INFINITY, f64::min);

            match impact {
                Impact::Benefit => {
                    best.push(max);
                    worst.push(min);
                }
                Impact::Cost => {
                    best.push(min);
                    worst.push(max);
                }
            }
        }

        Ok(IdealSolution { best, worst })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted() -> CriteriaMatrix {
        CriteriaMatrix::from_rows(
            vec!["q".to_string(), "p".to_string()],
            vec![vec![0.1, 0.5], vec![0.3, 0.2], vec![0.2, 0.4]],
        )
        .unwrap()
    }

    #[test]
    fn benefit_and_cost_pick_opposite_extremes() {
        let impacts = ImpactVector::parse("+,-").unwrap();
        let ideal = IdealSolver::ideal_solutions(&weighted(), &impacts).unwrap();

        assert_eq!(ideal.best, vec![0.3, 0.2]);
        assert_eq!(ideal.worst, vec![0.1, 0.5]);
    }

    #[test]
    fn all_cost_reverses_all_benefit() {
        let all_benefit = ImpactVector::parse("+,+").unwrap();
        let all_cost = ImpactVector::parse("-,-").unwrap();
        let benefit = IdealSolver::ideal_solutions(&weighted(), &all_benefit).unwrap();
        let cost = IdealSolver::ideal_solutions(&weighted(), &all_cost).unwrap();

        assert_eq!(benefit.best, cost.worst);
        assert_eq!(benefit.worst, cost.best);
    }

    #[test]
    fn empty_matrix_has_no_ideals() {
        let empty = CriteriaMatrix::from_rows(vec!["q".to_string()], vec![]).unwrap();
        assert_eq!(
            IdealSolver::ideal_solutions(&empty, &ImpactVector::parse("+").unwrap()),
            Err(TopsisError::EmptyMatrix)
        );
    }
}
