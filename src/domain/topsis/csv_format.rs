//! CSV encoding of decision matrices and result tables.

use super::{DecisionMatrix, ResultTable, TopsisError};

/// Reads a decision matrix from CSV bytes with a header row.
///
/// Blank lines are skipped. A row whose field count differs from the
/// header's is a structural error.
pub fn parse_csv(bytes: &[u8]) -> Result<DecisionMatrix, TopsisError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| TopsisError::malformed_csv(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| TopsisError::malformed_csv(e.to_string()))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    DecisionMatrix::new(headers, rows)
}

/// Writes a result table as CSV text, header first.
pub fn write_csv(table: &ResultTable) -> Result<String, TopsisError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(&table.headers)
        .map_err(|e| TopsisError::malformed_csv(e.to_string()))?;
    for record in table.records() {
        writer
            .write_record(&record)
            .map_err(|e| TopsisError::malformed_csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TopsisError::malformed_csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TopsisError::malformed_csv(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::TopsisPipeline;

    const SCENARIO: &str = "ID,Quality,Price,Service\nA,9,7,8\nB,8,7,8\nC,7,8,9\n";

    #[test]
    fn parses_header_and_rows() {
        let matrix = parse_csv(SCENARIO.as_bytes()).unwrap();
        assert_eq!(matrix.headers(), &["ID", "Quality", "Price", "Service"]);
        assert_eq!(matrix.row_count(), 3);
        assert_eq!(matrix.rows()[2], vec!["C", "7", "8", "9"]);
    }

    #[test]
    fn skips_blank_lines() {
        let matrix = parse_csv(b"ID,Q,P\nA,1,2\n\nB,3,4\n").unwrap();
        assert_eq!(matrix.row_count(), 2);
    }

    #[test]
    fn quoted_identifiers_survive() {
        let matrix = parse_csv(b"Name,Q,P\n\"Smith, J\",1,2\n").unwrap();
        assert_eq!(matrix.identifier(0), Some("Smith, J"));
    }

    #[test]
    fn ragged_rows_are_structural_errors() {
        let err = parse_csv(b"ID,Q,P\nA,1,2\nB,3\n").unwrap_err();
        assert!(matches!(err, TopsisError::RaggedRow { row: 1, .. }));
    }

    #[test]
    fn header_only_input_has_no_rows() {
        let matrix = parse_csv(b"ID,Q,P\n").unwrap();
        assert!(matrix.is_empty());
    }

    #[test]
    fn writes_result_with_appended_columns() {
        let matrix = parse_csv(SCENARIO.as_bytes()).unwrap();
        let table = TopsisPipeline::default().run(&matrix, "1,1,1", "+,+,+").unwrap();

        let csv = write_csv(&table).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ID,Quality,Price,Service,Topsis Score,Rank");
        assert_eq!(lines[1], "A,9,7,8,0.58,1");
        assert_eq!(lines[2], "B,8,7,8,0.36,3");
        assert_eq!(lines[3], "C,7,8,9,0.42,2");
    }

    #[test]
    fn written_identifiers_are_quoted_when_needed() {
        let matrix = parse_csv(b"Name,Q,P\n\"Smith, J\",1,2\nLee,2,1\n").unwrap();
        let table = TopsisPipeline::default().run(&matrix, "1,1", "+,+").unwrap();

        let csv = write_csv(&table).unwrap();
        assert!(csv.contains("\"Smith, J\",1,2,"));
    }
}
