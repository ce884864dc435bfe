//! Error types for the TOPSIS pipeline.

use std::fmt;
use thiserror::Error;

/// Broad classification of a pipeline error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The table shape is unusable (too few columns, no rows, ragged rows).
    Structural,
    /// A criterion cell is not a real number.
    DataType,
    /// The weights string could not be parsed.
    WeightParse,
    /// The impacts string could not be parsed.
    ImpactParse,
    /// Weights, impacts and criteria disagree on their counts.
    Cardinality,
    /// The numbers are valid but the math is undefined for them.
    DegenerateComputation,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCategory::Structural => "STRUCTURAL_ERROR",
            ErrorCategory::DataType => "DATA_TYPE_ERROR",
            ErrorCategory::WeightParse => "WEIGHT_PARSE_ERROR",
            ErrorCategory::ImpactParse => "IMPACT_PARSE_ERROR",
            ErrorCategory::Cardinality => "CARDINALITY_ERROR",
            ErrorCategory::DegenerateComputation => "DEGENERATE_COMPUTATION_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// A single reason why a TOPSIS run was rejected or could not complete.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("Input file must contain at least three columns")]
    TooFewColumns { found: usize },

    #[error("Input file must contain at least one data row")]
    EmptyMatrix,

    #[error("Row {} has {actual} fields, expected {expected}", .row + 1)]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Input is not valid CSV: {reason}")]
    MalformedCsv { reason: String },

    #[error("Column '{column}' contains non-numeric values")]
    NonNumericColumn { column: String },

    #[error("Weights must be numeric values separated by commas")]
    InvalidWeights,

    #[error("Weights must be positive numbers, got {value}")]
    NonPositiveWeight { value: f64 },

    #[error("Impacts must be either '+' or '-'")]
    InvalidImpact,

    #[error("Number of weights ({weights}) must equal number of impacts ({impacts})")]
    CountMismatch { weights: usize, impacts: usize },

    #[error(
        "Number of weights/impacts ({count}) must equal number of criteria columns ({criteria})"
    )]
    CriteriaCountMismatch { count: usize, criteria: usize },

    #[error("Column '{column}' contains only zeros and cannot be normalized")]
    ZeroColumn { column: String },

    #[error("Score for row {} is undefined: it coincides with both ideal solutions", .row + 1)]
    UndefinedScore { row: usize },
}

impl TopsisError {
    /// Returns the category this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            TopsisError::TooFewColumns { .. }
            | TopsisError::EmptyMatrix
            | TopsisError::RaggedRow { .. }
            | TopsisError::MalformedCsv { .. } => ErrorCategory::Structural,
            TopsisError::NonNumericColumn { .. } => ErrorCategory::DataType,
            TopsisError::InvalidWeights | TopsisError::NonPositiveWeight { .. } => {
                ErrorCategory::WeightParse
            }
            TopsisError::InvalidImpact => ErrorCategory::ImpactParse,
            TopsisError::CountMismatch { .. } | TopsisError::CriteriaCountMismatch { .. } => {
                ErrorCategory::Cardinality
            }
            TopsisError::ZeroColumn { .. } | TopsisError::UndefinedScore { .. } => {
                ErrorCategory::DegenerateComputation
            }
        }
    }

    /// Creates a malformed CSV error.
    pub fn malformed_csv(reason: impl Into<String>) -> Self {
        TopsisError::MalformedCsv {
            reason: reason.into(),
        }
    }

    /// Creates a non-numeric column error.
    pub fn non_numeric(column: impl Into<String>) -> Self {
        TopsisError::NonNumericColumn {
            column: column.into(),
        }
    }
}

/// Failure of a full pipeline run.
///
/// Validation failures carry every error the validator reported. A
/// computation failure carries the single error that stopped the numeric
/// stages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("input rejected: {}", join_messages(.0))]
    Invalid(Vec<TopsisError>),

    #[error("computation failed: {0}")]
    Computation(TopsisError),
}

impl PipelineError {
    /// Returns all underlying errors.
    pub fn errors(&self) -> Vec<&TopsisError> {
        match self {
            PipelineError::Invalid(errors) => errors.iter().collect(),
            PipelineError::Computation(error) => vec![error],
        }
    }

    /// Returns the human-readable messages, one per underlying error.
    pub fn messages(&self) -> Vec<String> {
        self.errors().iter().map(|e| e.to_string()).collect()
    }
}

fn join_messages(errors: &[TopsisError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_column_names_the_column() {
        let err = TopsisError::non_numeric("Price");
        assert_eq!(err.to_string(), "Column 'Price' contains non-numeric values");
        assert_eq!(err.category(), ErrorCategory::DataType);
    }

    #[test]
    fn count_mismatch_reports_both_counts() {
        let err = TopsisError::CountMismatch {
            weights: 2,
            impacts: 3,
        };
        assert_eq!(
            err.to_string(),
            "Number of weights (2) must equal number of impacts (3)"
        );
        assert_eq!(err.category(), ErrorCategory::Cardinality);
    }

    #[test]
    fn row_numbers_are_one_based_in_messages() {
        let err = TopsisError::UndefinedScore { row: 0 };
        assert!(err.to_string().contains("row 1"));

        let err = TopsisError::RaggedRow {
            row: 2,
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Row 3 has 3 fields, expected 4");
    }

    #[test]
    fn degenerate_errors_share_a_category() {
        let zero_column = TopsisError::ZeroColumn {
            column: "Cost".to_string(),
        };
        assert_eq!(zero_column.category(), ErrorCategory::DegenerateComputation);
        assert_eq!(
            TopsisError::UndefinedScore { row: 1 }.category(),
            ErrorCategory::DegenerateComputation
        );
        assert_eq!(TopsisError::InvalidImpact.category(), ErrorCategory::ImpactParse);
    }

    #[test]
    fn category_displays_as_code() {
        assert_eq!(ErrorCategory::Cardinality.to_string(), "CARDINALITY_ERROR");
        assert_eq!(
            ErrorCategory::DegenerateComputation.to_string(),
            "DEGENERATE_COMPUTATION_ERROR"
        );
    }

    #[test]
    fn pipeline_error_collects_messages() {
        let err = PipelineError::Invalid(vec![
            TopsisError::InvalidWeights,
            TopsisError::InvalidImpact,
        ]);
        assert_eq!(
            err.messages(),
            vec![
                "Weights must be numeric values separated by commas".to_string(),
                "Impacts must be either '+' or '-'".to_string(),
            ]
        );
        assert!(err.to_string().contains("; "));
    }

    #[test]
    fn computation_error_has_single_message() {
        let err = PipelineError::Computation(TopsisError::UndefinedScore { row: 0 });
        assert_eq!(err.errors().len(), 1);
    }
}
