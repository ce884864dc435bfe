//! Result Table - The input table annotated with score and rank.

use serde::Serialize;

use super::DecisionMatrix;

/// Header of the appended score column.
pub const SCORE_HEADER: &str = "Topsis Score";

/// Header of the appended rank column.
pub const RANK_HEADER: &str = "Rank";

/// One input row with its computed score and rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    /// The original cells, identifier first.
    pub cells: Vec<String>,
    /// Closeness score rounded to two decimals.
    pub score: f64,
    /// Competition rank, 1 = best.
    pub rank: usize,
}

impl ResultRow {
    pub fn identifier(&self) -> &str {
        self.cells.first().map(String::as_str).unwrap_or_default()
    }
}

/// The annotated table. Rows keep input order, not rank order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    pub headers: Vec<String>,
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Pairs each matrix row with its raw score and rank.
    ///
    /// Scores are rounded here; ranks must already come from the raw scores.
    pub(crate) fn assemble(matrix: &DecisionMatrix, scores: &[f64], ranks: &[usize]) -> Self {
        let rows = matrix
            .rows()
            .iter()
            .zip(scores.iter().zip(ranks))
            .map(|(cells, (&score, &rank))| ResultRow {
                cells: cells.clone(),
                score: round_to_cents(score),
                rank,
            })
            .collect();

        let mut headers = matrix.headers().to_vec();
        headers.push(SCORE_HEADER.to_string());
        headers.push(RANK_HEADER.to_string());

        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns each row as output records: original cells, score, rank.
    pub fn records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.rows.iter().map(|row| {
            let mut record = row.cells.clone();
            record.push(format!("{:.2}", row.score));
            record.push(row.rank.to_string());
            record
        })
    }
}

/// Rounds to two decimals, exact halves to the even neighbour.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ResultTable {
        let matrix = DecisionMatrix::builder()
            .headers(vec!["ID", "Q", "P"])
            .row(vec!["A", "1", "2"])
            .row(vec!["B", "3", "4"])
            .row(vec!["C", "5", "6"])
            .build()
            .unwrap();
        ResultTable::assemble(&matrix, &[0.4567, 0.9, 0.4567], &[2, 1, 2])
    }

    #[test]
    fn appends_score_and_rank_headers() {
        assert_eq!(table().headers, vec!["ID", "Q", "P", "Topsis Score", "Rank"]);
    }

    #[test]
    fn rounds_scores_to_two_decimals() {
        let t = table();
        assert_eq!(t.rows[0].score, 0.46);
        assert_eq!(t.rows[1].score, 0.9);
    }

    #[test]
    fn records_format_scores_with_two_decimals() {
        let records: Vec<_> = table().records().collect();
        assert_eq!(records[1], vec!["B", "3", "4", "0.90", "1"]);
    }

    #[test]
    fn exact_halves_round_to_even() {
        assert_eq!(round_to_cents(0.125), 0.12);
        assert_eq!(round_to_cents(0.375), 0.38);
        assert_eq!(round_to_cents(0.625), 0.62);
        assert_eq!(round_to_cents(0.875), 0.88);
    }

    #[test]
    fn rows_keep_identifier_first() {
        let t = table();
        let ids: Vec<_> = t.rows.iter().map(|r| r.identifier()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }
}
