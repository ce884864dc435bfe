//! Table Store Port - Persistence of uploaded inputs and computed results.
//!
//! The domain never touches the filesystem. Handlers go through this trait,
//! while adapters (like LocalCsvTableStore) provide the implementation.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::topsis::{DecisionMatrix, ResultTable, TopsisError};

/// Port for storing decision tables and their results.
///
/// # Contract
///
/// Implementations must:
/// - Keep uploads and results in separate locations
/// - Write atomically (no partial content visible on failure)
/// - Reject uploads larger than their configured limit
/// - Treat `name` as a bare file name, never as a path
///
/// # Usage
///
/// ```rust,ignore
/// let store: &dyn TableStore = get_store();
///
/// let input = store.save_upload("1f0c_data.csv", &bytes).await?;
/// let matrix = store.read_table(&input).await?;
/// let output = store.write_table("result_1f0c_data.csv", &table).await?;
/// store.remove(&input).await?;
/// ```
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Stores raw uploaded bytes under the upload location.
    ///
    /// # Returns
    ///
    /// The path where the upload was written.
    async fn save_upload(&self, name: &str, content: &[u8]) -> Result<FilePath, StorageError>;

    /// Reads and decodes a stored table.
    ///
    /// # Errors
    ///
    /// - `StorageError::NotFound` if nothing is stored at `path`
    /// - `StorageError::Malformed` if the content is not a valid table
    async fn read_table(&self, path: &FilePath) -> Result<DecisionMatrix, StorageError>;

    /// Encodes and stores a result table under the result location.
    async fn write_table(&self, name: &str, table: &ResultTable)
        -> Result<FilePath, StorageError>;

    /// Reads the raw bytes of a stored file.
    async fn read_bytes(&self, path: &FilePath) -> Result<Vec<u8>, StorageError>;

    /// Removes a stored file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the file doesn't exist.
    async fn remove(&self, path: &FilePath) -> Result<(), StorageError>;
}

/// Represents a file path (absolute or relative).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilePath(PathBuf);

impl FilePath {
    /// Creates a new file path from a PathBuf.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Returns the path as a string (lossy conversion for non-UTF8 paths).
    pub fn to_string_lossy(&self) -> String {
        self.0.to_string_lossy().to_string()
    }

    /// Returns a reference to the inner PathBuf.
    pub fn as_path(&self) -> &std::path::Path {
        &self.0
    }

    /// Returns the file name without the directory.
    pub fn file_name(&self) -> Option<String> {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
    }
}

impl std::fmt::Display for FilePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

impl From<PathBuf> for FilePath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for FilePath {
    fn from(s: &str) -> Self {
        Self::new(PathBuf::from(s))
    }
}

/// Errors that can occur during table storage operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    /// File was not found.
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// Permission denied accessing the file.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// IO error during file operation.
    #[error("IO error: {message}")]
    Io { message: String },

    /// File is too large.
    #[error("File too large: {size_bytes} bytes (max: {max_bytes})")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },

    /// Stored content is not a usable table.
    #[error("Malformed table: {0}")]
    Malformed(TopsisError),
}

impl StorageError {
    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a permission denied error.
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a file too large error.
    pub fn file_too_large(size_bytes: u64, max_bytes: u64) -> Self {
        Self::FileTooLarge {
            size_bytes,
            max_bytes,
        }
    }
}

impl From<TopsisError> for StorageError {
    fn from(err: TopsisError) -> Self {
        StorageError::Malformed(err)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_path_file_name_extracts_name() {
        let path = FilePath::new("/srv/uploads/data.csv");
        assert_eq!(path.file_name(), Some("data.csv".to_string()));
    }

    #[test]
    fn file_path_display_works() {
        let path: FilePath = "results/result_data.csv".into();
        assert_eq!(format!("{}", path), "results/result_data.csv");
    }

    #[test]
    fn storage_error_file_too_large_displays_sizes() {
        let err = StorageError::file_too_large(20_000_000, 16_777_216);
        assert!(err.to_string().contains("20000000"));
        assert!(err.to_string().contains("16777216"));
    }

    #[test]
    fn storage_error_wraps_table_errors() {
        let err: StorageError = TopsisError::EmptyMatrix.into();
        assert_eq!(err, StorageError::Malformed(TopsisError::EmptyMatrix));
        assert!(err.to_string().contains("at least one data row"));
    }

    #[test]
    fn table_store_is_object_safe() {
        fn check<T: TableStore + ?Sized>() {}
        check::<dyn TableStore>();
    }
}
