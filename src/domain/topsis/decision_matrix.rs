//! Decision Matrix - Raw tabular input and its numeric criteria block.

use serde::Serialize;

use super::TopsisError;

/// The raw decision table as read from the input.
///
/// The first column identifies each alternative and is never used in
/// computation. Every remaining column is a criterion. Cells are kept as
/// the original text so the output can reproduce them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionMatrix {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DecisionMatrix {
    /// Creates a matrix from a header row and data rows.
    ///
    /// # Errors
    ///
    /// Returns `TopsisError::RaggedRow` if any row's field count differs
    /// from the header's.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TopsisError> {
        let expected = headers.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(TopsisError::RaggedRow {
                row,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { headers, rows })
    }

    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::default()
    }

    /// Returns all column names, identifier column first.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the criterion column names (all but the identifier column).
    pub fn criterion_names(&self) -> &[String] {
        self.headers.get(1..).unwrap_or(&[])
    }

    /// Returns the data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the identifier cell of a row.
    pub fn identifier(&self, row: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.first()).map(String::as_str)
    }

    /// Returns the total number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Returns the number of criterion columns.
    pub fn criteria_count(&self) -> usize {
        self.headers.len().saturating_sub(1)
    }

    /// Returns the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the matrix has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DecisionMatrixBuilder {
    /// Sets the header row.
    pub fn headers(mut self, headers: Vec<impl Into<String>>) -> Self {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a data row.
    pub fn row(mut self, cells: Vec<impl Into<String>>) -> Self {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Builds the decision matrix.
    pub fn build(self) -> Result<DecisionMatrix, TopsisError> {
        DecisionMatrix::new(self.headers, self.rows)
    }
}

/// A dense, row-major block of criterion values with one label per column.
///
/// Used for the parsed criteria and for every matrix derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriteriaMatrix {
    labels: Vec<String>,
    values: Vec<f64>,
    rows: usize,
}

impl CriteriaMatrix {
    /// Creates a matrix from labelled rows.
    ///
    /// # Errors
    ///
    /// Returns `TopsisError::RaggedRow` if a row's length differs from the
    /// number of labels.
    pub fn from_rows(labels: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, TopsisError> {
        let columns = labels.len();
        let mut values = Vec::with_capacity(rows.len() * columns);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(TopsisError::RaggedRow {
                    row: index,
                    expected: columns,
                    actual: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Ok(Self {
            labels,
            values,
            rows: rows.len(),
        })
    }

    /// Returns the column labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the value at the given position.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row >= self.rows || column >= self.column_count() {
            return None;
        }
        self.values.get(row * self.column_count() + column).copied()
    }

    /// Returns one row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        let width = self.column_count();
        &self.values[row * width..(row + 1) * width]
    }

    /// Iterates over all rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Iterates over the values of one column, top to bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        let width = self.column_count();
        self.values.iter().skip(column).step_by(width.max(1)).copied().take(self.rows)
    }

    /// Returns a new matrix with `f(column, value)` applied to every cell.
    pub fn map_cells(&self, f: impl Fn(usize, f64) -> f64) -> Self {
        let width = self.column_count().max(1);
        let values = self
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| f(i % width, v))
            .collect();
        Self {
            labels: self.labels.clone(),
            values,
            rows: self.rows,
        }
    }
}
