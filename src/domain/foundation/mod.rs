//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary shared by the TOPSIS domain, its ports and its adapters.

mod email;
mod errors;
mod ids;
mod timestamp;
mod upload_filename;

pub use email::EmailAddress;
pub use errors::{ErrorCode, ValidationError};
pub use ids::AnalysisId;
pub use timestamp::Timestamp;
pub use upload_filename::{UploadFilename, CSV_EXTENSION};
