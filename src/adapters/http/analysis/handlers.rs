//! HTTP handlers for analysis endpoints.
//!
//! These handlers connect Axum routes to the application layer handlers.

use std::sync::Arc;

use axum::extract::{Json, Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use tracing::{info, warn};

use crate::application::handlers::{AnalysisError, RankTableHandler, RunAnalysisHandler};
use crate::domain::foundation::ErrorCode;
use crate::domain::topsis::{PipelineError, ValidationMode};
use crate::ports::{ResultNotifier, StorageError, TableStore};

use super::dto::{
    AnalysisResponse, ErrorResponse, FormError, HealthResponse, RankRequest, RankResponse,
    UploadForm,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Analysis API error that implements IntoResponse.
#[derive(Debug)]
pub enum AnalysisApiError {
    /// The upload form was incomplete or malformed.
    Form(FormError),
    /// The multipart body could not be read.
    BadRequest(String),
    /// The request body exceeded the upload limit.
    PayloadTooLarge(String),
    /// The table was rejected by validation or computation.
    Rejected(PipelineError),
    /// Storage failed.
    Storage(StorageError),
}

impl IntoResponse for AnalysisApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AnalysisApiError::Form(e) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::bad_request(e.to_string()),
            ),
            AnalysisApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            AnalysisApiError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorResponse::payload_too_large(msg),
            ),
            AnalysisApiError::Rejected(err) => {
                let (code, message) = match &err {
                    PipelineError::Invalid(_) => {
                        (ErrorCode::ValidationFailed, "Input validation failed")
                    }
                    PipelineError::Computation(_) => (
                        ErrorCode::ComputationFailed,
                        "TOPSIS computation is undefined for this input",
                    ),
                };
                let errors: Vec<_> = err
                    .errors()
                    .iter()
                    .map(|e| {
                        json!({
                            "category": e.category().to_string(),
                            "message": e.to_string(),
                        })
                    })
                    .collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse::new(code, message).with_details(json!({ "errors": errors })),
                )
            }
            AnalysisApiError::Storage(StorageError::FileTooLarge {
                size_bytes,
                max_bytes,
            }) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorResponse::payload_too_large(format!(
                    "File too large: {} bytes (max: {})",
                    size_bytes, max_bytes
                )),
            ),
            AnalysisApiError::Storage(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(ErrorCode::StorageError, err.to_string()),
            ),
        };
        (status, Json(error)).into_response()
    }
}

impl From<AnalysisError> for AnalysisApiError {
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::Rejected(err) => AnalysisApiError::Rejected(err),
            AnalysisError::Storage(err) => AnalysisApiError::Storage(err),
        }
    }
}

impl From<FormError> for AnalysisApiError {
    fn from(error: FormError) -> Self {
        AnalysisApiError::Form(error)
    }
}

impl From<axum::extract::multipart::MultipartError> for AnalysisApiError {
    fn from(error: axum::extract::multipart::MultipartError) -> Self {
        if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AnalysisApiError::PayloadTooLarge(error.body_text())
        } else {
            AnalysisApiError::BadRequest(error.body_text())
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing analysis dependencies.
#[derive(Clone)]
pub struct AnalysisAppState {
    pub table_store: Arc<dyn TableStore>,
    pub notifier: Arc<dyn ResultNotifier>,
    pub validation_mode: ValidationMode,
}

impl AnalysisAppState {
    pub fn new(
        table_store: Arc<dyn TableStore>,
        notifier: Arc<dyn ResultNotifier>,
        validation_mode: ValidationMode,
    ) -> Self {
        Self {
            table_store,
            notifier,
            validation_mode,
        }
    }

    pub fn run_analysis_handler(&self) -> RunAnalysisHandler {
        RunAnalysisHandler::new(
            self.table_store.clone(),
            self.notifier.clone(),
            self.validation_mode,
        )
    }

    pub fn rank_table_handler(&self) -> RankTableHandler {
        RankTableHandler::new(self.validation_mode)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/analyze
///
/// Accepts a multipart form with `file`, `weights`, `impacts` and `email`,
/// runs the analysis and delivers the result by email.
pub async fn analyze_upload(
    State(state): State<AnalysisAppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let form = read_upload_form(multipart).await?;
    let cmd = form.into_command().map_err(|e| {
        warn!(reason = %e, "Upload form refused");
        AnalysisApiError::from(e)
    })?;

    let report = state.run_analysis_handler().handle(cmd).await?;
    Ok((StatusCode::OK, Json(AnalysisResponse::from(report))))
}

/// POST /api/topsis
///
/// Ranks a CSV table passed in the JSON body and returns the scored table.
pub async fn rank_table(
    State(state): State<AnalysisAppState>,
    Json(request): Json<RankRequest>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let table = state
        .rank_table_handler()
        .handle(&request.into())
        .map_err(AnalysisApiError::Rejected)?;
    info!(rows = table.row_count(), "Inline table ranked");
    Ok((StatusCode::OK, Json(RankResponse::from(&table))))
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Collects the known form fields. Unknown fields are ignored.
async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AnalysisApiError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                form.file_name = field.file_name().map(str::to_string);
                form.file_content = field.bytes().await?.to_vec();
            }
            "weights" => form.weights = field.text().await?,
            "impacts" => form.impacts = field.text().await?,
            "email" => form.email = field.text().await?,
            _ => {}
        }
    }

    Ok(form)
}
