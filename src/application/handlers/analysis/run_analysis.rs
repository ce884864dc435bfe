//! RunAnalysisHandler - Command handler for a full upload-to-delivery analysis.
//!
//! Stores the upload, runs the TOPSIS pipeline on it, stores the result,
//! delivers it to the requester and removes both files again. Files are
//! removed on every path, including rejected input.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::foundation::{AnalysisId, EmailAddress, Timestamp, UploadFilename};
use crate::domain::topsis::{PipelineError, ResultTable, TopsisPipeline, ValidationMode};
use crate::ports::{
    DeliveryError, FilePath, ResultAttachment, ResultNotifier, StorageError, TableStore,
};

/// Command to analyze an uploaded table.
#[derive(Debug, Clone)]
pub struct RunAnalysisCommand {
    /// Sanitized name of the uploaded file.
    pub upload: UploadFilename,
    /// Raw uploaded bytes.
    pub content: Vec<u8>,
    /// Raw weights string, e.g. `"1,1,2"`.
    pub weights: String,
    /// Raw impacts string, e.g. `"+,-,+"`.
    pub impacts: String,
    /// Where the result is delivered.
    pub recipient: EmailAddress,
}

/// Outcome of delivering the result file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// The result was sent.
    Delivered { recipient: String },
    /// No delivery channel is configured.
    Skipped,
    /// Sending failed. The analysis itself still succeeded.
    Failed { reason: String },
}

impl DeliveryStatus {
    fn from_outcome(recipient: &EmailAddress, outcome: Result<(), DeliveryError>) -> Self {
        match outcome {
            Ok(()) => DeliveryStatus::Delivered {
                recipient: recipient.as_str().to_string(),
            },
            Err(DeliveryError::NotConfigured) => DeliveryStatus::Skipped,
            Err(e) => DeliveryStatus::Failed {
                reason: e.to_string(),
            },
        }
    }
}

/// Result of a successful analysis.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub analysis_id: AnalysisId,
    /// The scored and ranked table.
    pub table: ResultTable,
    /// The result file as delivered.
    pub result_csv: String,
    /// File name the result was delivered under.
    pub result_filename: String,
    pub delivery: DeliveryStatus,
    pub completed_at: Timestamp,
}

/// Error type for running an analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The input was invalid or the computation was undefined for it.
    #[error("{0}")]
    Rejected(#[from] PipelineError),

    /// Storing or reading a file failed.
    #[error("storage failure: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for AnalysisError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Malformed(e) => AnalysisError::Rejected(PipelineError::Invalid(vec![e])),
            other => AnalysisError::Storage(other),
        }
    }
}

/// Handler for running analyses.
pub struct RunAnalysisHandler {
    store: Arc<dyn TableStore>,
    notifier: Arc<dyn ResultNotifier>,
    pipeline: TopsisPipeline,
}

impl RunAnalysisHandler {
    pub fn new(
        store: Arc<dyn TableStore>,
        notifier: Arc<dyn ResultNotifier>,
        mode: ValidationMode,
    ) -> Self {
        Self {
            store,
            notifier,
            pipeline: TopsisPipeline::new(mode),
        }
    }

    pub async fn handle(&self, cmd: RunAnalysisCommand) -> Result<AnalysisReport, AnalysisError> {
        let analysis_id = AnalysisId::new();
        let stored_name = format!("{}_{}", analysis_id, cmd.upload);
        info!(
            analysis_id = %analysis_id,
            upload = %cmd.upload,
            bytes = cmd.content.len(),
            "Starting analysis"
        );

        // 1. Persist upload
        let input_path = self.store.save_upload(&stored_name, &cmd.content).await?;

        // 2. Analyze, then drop the upload whatever happened
        let outcome = self.analyze(analysis_id, &input_path, &stored_name, &cmd).await;
        self.discard(analysis_id, &input_path).await;

        match &outcome {
            Ok(report) => info!(
                analysis_id = %analysis_id,
                rows = report.table.row_count(),
                delivery = ?report.delivery,
                "Analysis completed"
            ),
            Err(e) => warn!(analysis_id = %analysis_id, error = %e, "Analysis failed"),
        }
        outcome
    }

    async fn analyze(
        &self,
        analysis_id: AnalysisId,
        input_path: &FilePath,
        stored_name: &str,
        cmd: &RunAnalysisCommand,
    ) -> Result<AnalysisReport, AnalysisError> {
        let matrix = self.store.read_table(input_path).await?;
        debug!(
            analysis_id = %analysis_id,
            rows = matrix.row_count(),
            columns = matrix.column_count(),
            "Table loaded"
        );

        let table = self.pipeline.run(&matrix, &cmd.weights, &cmd.impacts)?;

        let result_path = self
            .store
            .write_table(&format!("result_{}", stored_name), &table)
            .await?;
        let delivered = self.deliver(analysis_id, &result_path, cmd).await;
        self.discard(analysis_id, &result_path).await;
        let (result_csv, delivery) = delivered?;

        Ok(AnalysisReport {
            analysis_id,
            table,
            result_csv,
            result_filename: cmd.upload.result_name(),
            delivery,
            completed_at: Timestamp::now(),
        })
    }

    async fn deliver(
        &self,
        analysis_id: AnalysisId,
        result_path: &FilePath,
        cmd: &RunAnalysisCommand,
    ) -> Result<(String, DeliveryStatus), AnalysisError> {
        let content = self.store.read_bytes(result_path).await?;
        let result_csv = String::from_utf8_lossy(&content).into_owned();
        let attachment = ResultAttachment::new(cmd.upload.result_name(), content);

        let outcome = self
            .notifier
            .deliver_result(&cmd.recipient, &attachment)
            .await;
        if let Err(e) = &outcome {
            if *e != DeliveryError::NotConfigured {
                warn!(analysis_id = %analysis_id, error = %e, "Result delivery failed");
            }
        }

        Ok((result_csv, DeliveryStatus::from_outcome(&cmd.recipient, outcome)))
    }

    async fn discard(&self, analysis_id: AnalysisId, path: &FilePath) {
        if let Err(e) = self.store.remove(path).await {
            warn!(analysis_id = %analysis_id, path = %path, error = %e, "Failed to remove file");
        }
    }
}
