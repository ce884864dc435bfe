//! Local CSV Store Adapter - Implementation of TableStore on the local disk.
//!
//! Uploads and results live in two separate directories. Every write goes
//! through a temp file that is synced and then renamed into place.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::topsis::csv_format::{parse_csv, write_csv};
use crate::domain::topsis::{DecisionMatrix, ResultTable};
use crate::ports::{FilePath, StorageError, TableStore};

/// Default size limit for a single upload (16 MB).
pub const DEFAULT_MAX_FILE_BYTES: u64 = 16 * 1024 * 1024;

/// Local filesystem store for CSV tables.
///
/// # Directory Structure
///
/// ```text
/// {upload_dir}/
/// └── {analysis_id}_data.csv
/// {result_dir}/
/// └── result_{analysis_id}_data.csv
/// ```
///
/// # Usage
///
/// ```rust,ignore
/// let store = LocalCsvTableStore::new("uploads", "results");
/// let input = store.save_upload("1f0c_data.csv", &bytes).await?;
/// let matrix = store.read_table(&input).await?;
/// ```
#[derive(Debug, Clone)]
pub struct LocalCsvTableStore {
    upload_dir: PathBuf,
    result_dir: PathBuf,
    max_file_bytes: u64,
}

impl LocalCsvTableStore {
    /// Creates a store rooted at the given directories.
    pub fn new(upload_dir: impl Into<PathBuf>, result_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            result_dir: result_dir.into(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }

    /// Sets the size limit for uploads.
    pub fn with_max_file_bytes(mut self, max_file_bytes: u64) -> Self {
        self.max_file_bytes = max_file_bytes;
        self
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn result_dir(&self) -> &Path {
        &self.result_dir
    }

    /// Creates both directories if they don't exist yet.
    pub async fn ensure_dirs(&self) -> Result<(), StorageError> {
        for dir in [&self.upload_dir, &self.result_dir] {
            fs::create_dir_all(dir).await.map_err(|e| {
                StorageError::io(format!(
                    "Failed to create directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Joins a bare file name onto a directory, rejecting anything path-like.
    fn entry_path(dir: &Path, name: &str) -> Result<PathBuf, StorageError> {
        let is_bare = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains('/')
            && !name.contains('\\');
        if !is_bare {
            return Err(StorageError::io(format!("Invalid file name: {:?}", name)));
        }
        Ok(dir.join(name))
    }

    /// Writes bytes to `final_path` via a synced temp file and a rename.
    ///
    /// The temp file is removed again if any step fails.
    async fn write_atomic(&self, final_path: &Path, content: &[u8]) -> Result<(), StorageError> {
        let mut temp_name = final_path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        let result = Self::write_then_rename(&temp_path, final_path, content).await;
        if result.is_err() {
            // The temp file may never have been created.
            let _ = fs::remove_file(&temp_path).await;
        }
        result
    }

    async fn write_then_rename(
        temp_path: &Path,
        final_path: &Path,
        content: &[u8],
    ) -> Result<(), StorageError> {
        let mut file = fs::File::create(temp_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(content).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        drop(file);

        fs::rename(temp_path, final_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })
    }

    fn map_io(path: &Path, action: &str, e: std::io::Error) -> StorageError {
        match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::not_found(path.display().to_string()),
            std::io::ErrorKind::PermissionDenied => {
                StorageError::permission_denied(path.display().to_string())
            }
            _ => StorageError::io(format!("Failed to {} {}: {}", action, path.display(), e)),
        }
    }
}

#[async_trait]
impl TableStore for LocalCsvTableStore {
    async fn save_upload(&self, name: &str, content: &[u8]) -> Result<FilePath, StorageError> {
        let size = content.len() as u64;
        if size > self.max_file_bytes {
            return Err(StorageError::file_too_large(size, self.max_file_bytes));
        }

        let path = Self::entry_path(&self.upload_dir, name)?;
        self.ensure_dirs().await?;
        self.write_atomic(&path, content).await?;
        Ok(FilePath::new(path))
    }

    async fn read_table(&self, path: &FilePath) -> Result<DecisionMatrix, StorageError> {
        let bytes = self.read_bytes(path).await?;
        Ok(parse_csv(&bytes)?)
    }

    async fn write_table(
        &self,
        name: &str,
        table: &ResultTable,
    ) -> Result<FilePath, StorageError> {
        let path = Self::entry_path(&self.result_dir, name)?;
        let content = write_csv(table)?;
        self.ensure_dirs().await?;
        self.write_atomic(&path, content.as_bytes()).await?;
        Ok(FilePath::new(path))
    }

    async fn read_bytes(&self, path: &FilePath) -> Result<Vec<u8>, StorageError> {
        let path = path.as_path();
        fs::read(path).await.map_err(|e| Self::map_io(path, "read", e))
    }

    async fn remove(&self, path: &FilePath) -> Result<(), StorageError> {
        let path = path.as_path();
        fs::remove_file(path)
            .await
            .map_err(|e| Self::map_io(path, "delete", e))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
