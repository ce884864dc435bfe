//! In-Memory Table Store Adapter
//!
//! Keeps stored tables in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::topsis::csv_format::{parse_csv, write_csv};
use crate::domain::topsis::{DecisionMatrix, ResultTable};
use crate::ports::{FilePath, StorageError, TableStore};

/// In-memory storage for uploads and results
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableStore {
    files: Arc<RwLock<HashMap<FilePath, Vec<u8>>>>,
}

impl InMemoryTableStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored files
    pub async fn file_count(&self) -> usize {
        self.files.read().await.len()
    }

    /// Returns true if something is stored at `path`
    pub async fn contains(&self, path: &FilePath) -> bool {
        self.files.read().await.contains_key(path)
    }
}

#[async_trait]
impl TableStore for InMemoryTableStore {
    async fn save_upload(&self, name: &str, content: &[u8]) -> Result<FilePath, StorageError> {
        let path = FilePath::new(format!("uploads/{}", name));
        self.files
            .write()
            .await
            .insert(path.clone(), content.to_vec());
        Ok(path)
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
        let path = FilePath::new(format!("results/{}", name));
        let content = write_csv(table)?;
        self.files
            .write()
            .await
            .insert(path.clone(), content.into_bytes());
        Ok(path)
    }

    async fn read_bytes(&self, path: &FilePath) -> Result<Vec<u8>, StorageError> {
        self.files
            .read()
            .await
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path.to_string()))
    }

    async fn remove(&self, path: &FilePath) -> Result<(), StorageError> {
        self.files
            .write()
            .await
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| StorageError::not_found(path.to_string()))
    }
}
