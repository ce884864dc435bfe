//! Property tests for the TOPSIS pipeline.
//!
//! Random decision tables with strictly positive values exercise the
//! invariants that must hold for any valid input:
//! 1. Scores lie in [0, 1]
//! 2. Ranks follow scores (higher score, better rank; ties share a rank)
//! 3. Runs are deterministic
//! 4. Flipping every impact turns each score s into 1 - s
//! 5. Scaling all weights by the same factor leaves scores unchanged

use proptest::prelude::*;

use topsis_service::domain::topsis::{
    DecisionMatrix, InputValidator, PipelineError, Ranking, ResultTable, TopsisPipeline,
};

const TOLERANCE: f64 = 1e-9;

// =============================================================================
// Generators and helpers
// =============================================================================

#[derive(Debug, Clone)]
struct Table {
    values: Vec<Vec<f64>>,
    weights: Vec<f64>,
    benefit: Vec<bool>,
}

fn table_strategy() -> impl Strategy<Value = Table> {
    (2usize..5, 2usize..8).prop_flat_map(|(criteria, rows)| {
        (
            prop::collection::vec(prop::collection::vec(1.0f64..100.0, criteria), rows),
            prop::collection::vec(0.1f64..5.0, criteria),
            prop::collection::vec(any::<bool>(), criteria),
        )
            .prop_map(|(values, weights, benefit)| Table {
                values,
                weights,
                benefit,
            })
    })
}

fn matrix(table: &Table) -> DecisionMatrix {
    let criteria = table.weights.len();
    let mut headers = vec!["ID".to_string()];
    headers.extend((0..criteria).map(|c| format!("C{}", c)));

    let rows = table
        .values
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut cells = vec![format!("R{}", i)];
            cells.extend(row.iter().map(|v| v.to_string()));
            cells
        })
        .collect();

    DecisionMatrix::new(headers, rows).unwrap()
}

fn join(values: impl Iterator<Item = String>) -> String {
    values.collect::<Vec<_>>().join(",")
}

fn weights_str(weights: &[f64]) -> String {
    join(weights.iter().map(|w| w.to_string()))
}

fn impacts_str(benefit: &[bool]) -> String {
    join(benefit.iter().map(|&b| if b { "+" } else { "-" }.to_string()))
}

/// Raw ranking, or `None` if the input is degenerate for TOPSIS.
fn ranking(table: &Table, weights: &str, impacts: &str) -> Option<Ranking> {
    let input = InputValidator::default()
        .parse(&matrix(table), weights, impacts)
        .unwrap();
    TopsisPipeline::compute(&input).ok()
}

fn run(table: &Table) -> Result<ResultTable, PipelineError> {
    TopsisPipeline::default().run(
        &matrix(table),
        &weights_str(&table.weights),
        &impacts_str(&table.benefit),
    )
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn scores_are_within_unit_interval(table in table_strategy()) {
        let result = run(&table);
        prop_assume!(result.is_ok());

        for row in result.unwrap().rows {
            prop_assert!((0.0..=1.0).contains(&row.score), "score {} out of range", row.score);
            prop_assert!(row.rank >= 1 && row.rank <= table.values.len());
        }
    }

    #[test]
    fn ranks_follow_raw_scores(table in table_strategy()) {
        let r = ranking(&table, &weights_str(&table.weights), &impacts_str(&table.benefit));
        prop_assume!(r.is_some());
        let r = r.unwrap();

        prop_assert!(r.ranks.contains(&1));
        for i in 0..r.scores.len() {
            for j in 0..r.scores.len() {
                if r.scores[i] > r.scores[j] {
                    prop_assert!(r.ranks[i] < r.ranks[j]);
                } else if r.scores[i] == r.scores[j] {
                    prop_assert_eq!(r.ranks[i], r.ranks[j]);
                }
            }
        }
    }

    #[test]
    fn runs_are_deterministic(table in table_strategy()) {
        prop_assert_eq!(run(&table), run(&table));
    }

    #[test]
    fn reversing_impacts_complements_scores(table in table_strategy()) {
        let weights = weights_str(&table.weights);
        let flipped: Vec<bool> = table.benefit.iter().map(|b| !b).collect();

        let original = ranking(&table, &weights, &impacts_str(&table.benefit));
        let reversed = ranking(&table, &weights, &impacts_str(&flipped));
        prop_assume!(original.is_some() && reversed.is_some());

        for (s, s_rev) in original.unwrap().scores.iter().zip(reversed.unwrap().scores) {
            prop_assert!((s + s_rev - 1.0).abs() < TOLERANCE, "{} + {} != 1", s, s_rev);
        }
    }

    #[test]
    fn scaling_weights_leaves_scores_unchanged(
        table in table_strategy(),
        factor in 0.5f64..20.0,
    ) {
        let impacts = impacts_str(&table.benefit);
        let scaled: Vec<f64> = table.weights.iter().map(|w| w * factor).collect();

        let original = ranking(&table, &weights_str(&table.weights), &impacts);
        let rescaled = ranking(&table, &weights_str(&scaled), &impacts);
        prop_assume!(original.is_some() && rescaled.is_some());

        for (a, b) in original.unwrap().scores.iter().zip(rescaled.unwrap().scores) {
            prop_assert!((a - b).abs() < TOLERANCE, "{} != {}", a, b);
        }
    }

    #[test]
    fn output_keeps_input_rows_verbatim(table in table_strategy()) {
        let result = run(&table);
        prop_assume!(result.is_ok());
        let m = matrix(&table);

        let result = result.unwrap();
        prop_assert_eq!(result.rows.len(), m.row_count());
        for (row, cells) in result.rows.iter().zip(m.rows()) {
            prop_assert_eq!(&row.cells, cells);
        }
    }
}
