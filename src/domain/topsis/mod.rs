//! TOPSIS Module - Pure domain services for multi-criteria ranking.
//!
//! Ranks alternatives by their relative closeness to an ideal-best and an
//! ideal-worst reference point in normalized, weighted criterion space.
//!
//! # Components
//!
//! - `InputValidator` - Structural and semantic checks on matrix, weights, impacts
//! - `Normalizer` - Vector (Euclidean) normalization per criterion column
//! - `Weighter` - Applies per-criterion weights
//! - `IdealSolver` - Ideal-best / ideal-worst vectors from impact directions
//! - `DistanceScorer` - Euclidean separation and closeness score
//! - `Ranker` - Competition ranking ("min" tie method)
//! - `TopsisPipeline` - Runs the stages above in order, all-or-nothing
//!
//! Every stage is a pure function: it borrows its inputs and returns a new
//! value. No state survives between runs.

mod criteria;
pub mod csv_format;
mod decision_matrix;
mod distance_scorer;
mod errors;
mod ideal_solver;
mod normalizer;
mod pipeline;
mod ranker;
mod result_table;
mod validator;
mod weighter;

pub use criteria::{Impact, ImpactVector, WeightVector};
pub use decision_matrix::{CriteriaMatrix, DecisionMatrix, DecisionMatrixBuilder};
pub use distance_scorer::{DistanceScorer, Distances};
pub use errors::{ErrorCategory, PipelineError, TopsisError};
pub use ideal_solver::{IdealSolution, IdealSolver};
pub use normalizer::Normalizer;
pub use pipeline::{Ranking, TopsisPipeline};
pub use ranker::Ranker;
pub use result_table::{ResultRow, ResultTable, RANK_HEADER, SCORE_HEADER};
pub use validator::{InputValidator, ValidatedInput, ValidationMode, MIN_COLUMNS};
pub use weighter::Weighter;
