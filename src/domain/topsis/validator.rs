//! Input Validator - Structural and semantic checks before any computation.

use serde::Deserialize;

use super::{CriteriaMatrix, DecisionMatrix, ImpactVector, TopsisError, WeightVector};

/// Minimum column count: one identifier plus two criteria.
pub const MIN_COLUMNS: usize = 3;

/// How many violations a validation pass reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Stop at the first failing check and report only its errors.
    #[default]
    FailFast,
    /// Run every check whose inputs are available and report all violations.
    Aggregate,
}

/// Input that passed validation, ready for the numeric stages.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub criteria: CriteriaMatrix,
    pub weights: WeightVector,
    pub impacts: ImpactVector,
}

/// Validates a decision matrix together with its raw weights and impacts.
///
/// Checks run in a fixed order:
/// 1. at least three columns, then at least one data row
/// 2. every criterion cell is a finite real number
/// 3. weights parse
/// 4. impacts parse
/// 5. weight count equals impact count
/// 6. that count equals the criteria column count
#[derive(Debug, Clone, Copy, Default)]
pub struct InputValidator {
    mode: ValidationMode,
}

impl InputValidator {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    /// Returns every violation found; an empty list means the input is valid.
    pub fn validate(
        &self,
        matrix: &DecisionMatrix,
        weights_raw: &str,
        impacts_raw: &str,
    ) -> Vec<TopsisError> {
        match self.parse(matrix, weights_raw, impacts_raw) {
            Ok(_) => Vec::new(),
            Err(errors) => errors,
        }
    }

    /// Validates and, on success, returns the parsed numeric input.
    pub fn parse(
        &self,
        matrix: &DecisionMatrix,
        weights_raw: &str,
        impacts_raw: &str,
    ) -> Result<ValidatedInput, Vec<TopsisError>> {
        let fail_fast = self.mode == ValidationMode::FailFast;
        let mut errors = Vec::new();

        let structure_ok = match Self::check_structure(matrix) {
            Ok(()) => true,
            Err(e) => {
                errors.push(e);
                if fail_fast {
                    return Err(errors);
                }
                false
            }
        };

        let criteria = if structure_ok {
            match Self::criteria_block(matrix) {
                Ok(criteria) => Some(criteria),
                Err(mut column_errors) => {
                    if fail_fast {
                        column_errors.truncate(1);
                        return Err(column_errors);
                    }
                    errors.extend(column_errors);
                    None
                }
            }
        } else {
            None
        };

        let weights = match WeightVector::parse(weights_raw) {
            Ok(weights) => Some(weights),
            Err(e) => {
                errors.push(e);
                if fail_fast {
                    return Err(errors);
                }
                None
            }
        };

        let impacts = match ImpactVector::parse(impacts_raw) {
            Ok(impacts) => Some(impacts),
            Err(e) => {
                errors.push(e);
                if fail_fast {
                    return Err(errors);
                }
                None
            }
        };

        if let (Some(w), Some(i)) = (&weights, &impacts) {
            if w.len() != i.len() {
                errors.push(TopsisError::CountMismatch {
                    weights: w.len(),
                    impacts: i.len(),
                });
            } else if structure_ok && w.len() != matrix.criteria_count() {
                errors.push(TopsisError::CriteriaCountMismatch {
                    count: w.len(),
                    criteria: matrix.criteria_count(),
                });
            }
        }

        match (criteria, weights, impacts) {
            (Some(criteria), Some(weights), Some(impacts)) if errors.is_empty() => {
                Ok(ValidatedInput {
                    criteria,
                    weights,
                    impacts,
                })
            }
            _ => Err(errors),
        }
    }

    fn check_structure(matrix: &DecisionMatrix) -> Result<(), TopsisError> {
        if matrix.column_count() < MIN_COLUMNS {
            return Err(TopsisError::TooFewColumns {
                found: matrix.column_count(),
            });
        }
        if matrix.is_empty() {
            return Err(TopsisError::EmptyMatrix);
        }
        Ok(())
    }

    /// Parses the criterion columns, reporting every non-numeric column in
    /// column order.
    fn criteria_block(matrix: &DecisionMatrix) -> Result<CriteriaMatrix, Vec<TopsisError>> {
        let errors: Vec<TopsisError> = matrix
            .criterion_names()
            .iter()
            .enumerate()
            .filter(|(j, _)| {
                matrix
                    .rows()
                    .iter()
                    .any(|row| parse_cell(&row[j + 1]).is_none())
            })
            .map(|(_, name)| TopsisError::non_numeric(name.clone()))
            .collect();

        if !errors.is_empty() {
            return Err(errors);
        }

        let rows = matrix
            .rows()
            .iter()
            .map(|row| row[1..].iter().filter_map(|cell| parse_cell(cell)).collect())
            .collect();

        CriteriaMatrix::from_rows(matrix.criterion_names().to_vec(), rows).map_err(|e| vec![e])
    }
}

/// Parses a criterion cell; blanks and non-finite values are not numeric.
fn parse_cell(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
