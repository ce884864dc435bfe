//! TOPSIS Pipeline - Validator through Ranker in one pass.

use tracing::debug;

use super::{
    DecisionMatrix, DistanceScorer, IdealSolver, InputValidator, Normalizer, PipelineError,
    Ranker, ResultTable, TopsisError, ValidatedInput, ValidationMode, Weighter,
};

/// Raw scores and ranks for a validated input, in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub scores: Vec<f64>,
    pub ranks: Vec<usize>,
}

/// Runs the full TOPSIS computation.
///
/// Stateless apart from the validation mode; safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopsisPipeline {
    validator: InputValidator,
}

impl TopsisPipeline {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            validator: InputValidator::new(mode),
        }
    }

    /// Validates the input, computes scores and ranks, and returns the
    /// annotated table. Nothing is returned unless every stage succeeds.
    pub fn run(
        &self,
        matrix: &DecisionMatrix,
        weights_raw: &str,
        impacts_raw: &str,
    ) -> Result<ResultTable, PipelineError> {
        let input = self
            .validator
            .parse(matrix, weights_raw, impacts_raw)
            .map_err(PipelineError::Invalid)?;

        let ranking = Self::compute(&input).map_err(PipelineError::Computation)?;

        Ok(ResultTable::assemble(matrix, &ranking.scores, &ranking.ranks))
    }

    /// Runs the numeric stages on already validated input.
    pub fn compute(input: &ValidatedInput) -> Result<Ranking, TopsisError> {
        let normalized = Normalizer::normalize(&input.criteria)?;
        let weighted = Weighter::weight(&normalized, &input.weights)?;
        let ideal = IdealSolver::ideal_solutions(&weighted, &input.impacts)?;
        let distances = DistanceScorer::distances(&weighted, &ideal);
        let scores = DistanceScorer::score(&distances)?;
        let ranks = Ranker::rank(&scores);

        debug!(
            rows = scores.len(),
            criteria = input.criteria.column_count(),
            "TOPSIS ranking computed"
        );

        Ok(Ranking { scores, ranks })
    }
}
