//! Sanitized name of an uploaded CSV file.

use std::fmt;
use unicode_normalization::UnicodeNormalization;

use super::ValidationError;

/// Required extension of uploaded tables.
pub const CSV_EXTENSION: &str = ".csv";

/// An uploaded file name reduced to a safe basename.
///
/// Accented letters are folded to their ASCII base (NFKD). Path separators,
/// whitespace and anything outside `[A-Za-z0-9_.-]` are then removed so the
/// name can be joined onto a storage directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UploadFilename(String);

impl UploadFilename {
    /// Checks the `.csv` extension and sanitizes the name.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::empty_field("file"));
        }
        if !raw.ends_with(CSV_EXTENSION) {
            return Err(ValidationError::invalid_format(
                "file",
                "only CSV files are allowed",
            ));
        }

        let sanitized = sanitize(raw);
        if sanitized.len() <= CSV_EXTENSION.len() || !sanitized.ends_with(CSV_EXTENSION) {
            return Err(ValidationError::invalid_format(
                "file",
                "file name has no usable characters",
            ));
        }
        Ok(Self(sanitized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name under which the result for this upload is delivered.
    pub fn result_name(&self) -> String {
        format!("result_{}", self.0)
    }
}

impl fmt::Display for UploadFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn sanitize(raw: &str) -> String {
    let spaced: String = raw
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    spaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}
