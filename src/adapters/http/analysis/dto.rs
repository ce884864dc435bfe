//! Data transfer objects for analysis endpoints.
//!
//! These types decouple the HTTP API from application layer types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::handlers::{
    AnalysisReport, DeliveryStatus, RankTableCommand, RunAnalysisCommand,
};
use crate::domain::foundation::{
    AnalysisId, EmailAddress, ErrorCode, Timestamp, UploadFilename, ValidationError,
    CSV_EXTENSION,
};
use crate::domain::topsis::{ResultRow, ResultTable};

// ════════════════════════════════════════════════════════════════════════════════
// Upload form
// ════════════════════════════════════════════════════════════════════════════════

/// Fields collected from the multipart upload form.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub file_name: Option<String>,
    pub file_content: Vec<u8>,
    pub weights: String,
    pub impacts: String,
    pub email: String,
}

/// Reasons an upload form is refused before any analysis runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please upload a CSV file")]
    MissingFile,

    #[error("Please enter weights")]
    MissingWeights,

    #[error("Please enter impacts")]
    MissingImpacts,

    #[error("Please enter email address")]
    MissingEmail,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Only CSV files are allowed")]
    NotCsv,

    #[error("File name has no usable characters")]
    UnusableFileName,
}

impl UploadForm {
    /// Checks the form in order and builds the analysis command.
    ///
    /// Order: file present, weights, impacts, email present, email format,
    /// `.csv` extension.
    pub fn into_command(self) -> Result<RunAnalysisCommand, FormError> {
        let file_name = self
            .file_name
            .filter(|name| !name.is_empty())
            .ok_or(FormError::MissingFile)?;

        let weights = self.weights.trim();
        if weights.is_empty() {
            return Err(FormError::MissingWeights);
        }
        let impacts = self.impacts.trim();
        if impacts.is_empty() {
            return Err(FormError::MissingImpacts);
        }

        let recipient = EmailAddress::parse(&self.email).map_err(|e| match e {
            ValidationError::EmptyField { .. } => FormError::MissingEmail,
            ValidationError::InvalidFormat { .. } => FormError::InvalidEmail,
        })?;

        if !file_name.ends_with(CSV_EXTENSION) {
            return Err(FormError::NotCsv);
        }
        let upload = UploadFilename::parse(&file_name).map_err(|_| FormError::UnusableFileName)?;

        Ok(RunAnalysisCommand {
            upload,
            content: self.file_content,
            weights: weights.to_string(),
            impacts: impacts.to_string(),
            recipient,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for inline ranking.
#[derive(Debug, Clone, Deserialize)]
pub struct RankRequest {
    /// CSV text with a header row.
    pub csv: String,
    pub weights: String,
    pub impacts: String,
}

impl From<RankRequest> for RankTableCommand {
    fn from(req: RankRequest) -> Self {
        RankTableCommand {
            csv: req.csv,
            weights: req.weights,
            impacts: req.impacts,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// One ranked alternative.
#[derive(Debug, Clone, Serialize)]
pub struct RankedRowView {
    pub identifier: String,
    pub cells: Vec<String>,
    pub score: f64,
    pub rank: usize,
}

impl From<&ResultRow> for RankedRowView {
    fn from(row: &ResultRow) -> Self {
        Self {
            identifier: row.identifier().to_string(),
            cells: row.cells.clone(),
            score: row.score,
            rank: row.rank,
        }
    }
}

/// Scored table in input row order.
#[derive(Debug, Clone, Serialize)]
pub struct RankResponse {
    pub headers: Vec<String>,
    pub rows: Vec<RankedRowView>,
}

impl From<&ResultTable> for RankResponse {
    fn from(table: &ResultTable) -> Self {
        Self {
            headers: table.headers.clone(),
            rows: table.rows.iter().map(RankedRowView::from).collect(),
        }
    }
}

/// Response of a completed upload analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub analysis_id: AnalysisId,
    pub message: String,
    pub result_filename: String,
    pub result_csv: String,
    pub headers: Vec<String>,
    pub rows: Vec<RankedRowView>,
    pub delivery: DeliveryStatus,
    pub completed_at: Timestamp,
}

impl From<AnalysisReport> for AnalysisResponse {
    fn from(report: AnalysisReport) -> Self {
        let message = match &report.delivery {
            DeliveryStatus::Delivered { recipient } => {
                format!("TOPSIS analysis completed! Result sent to {}", recipient)
            }
            DeliveryStatus::Skipped => "TOPSIS analysis completed".to_string(),
            DeliveryStatus::Failed { reason } => {
                format!("Analysis completed but email failed: {}", reason)
            }
        };
        let table = RankResponse::from(&report.table);

        Self {
            analysis_id: report.analysis_id,
            message,
            result_filename: report.result_filename,
            result_csv: report.result_csv,
            headers: table.headers,
            rows: table.rows,
            delivery: report.delivery,
            completed_at: report.completed_at,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PayloadTooLarge, message)
    }
}
