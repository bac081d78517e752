//! JSON document store for the transaction ledger
//!
//! The ledger is persisted as a single JSON document holding an array
//! of records. There is no partial I/O: `load` reads and deserializes
//! the whole document, `save` rewrites it entirely. Writes go through
//! a sibling temp file followed by a rename, so a crash mid-write
//! leaves the previous document intact.

pub mod error;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use error::{StoreError, StoreResult};

/// Store reference type
pub type StoreRef<T> = Arc<dyn DocumentStore<T>>;

/// Trait for whole-document record stores
#[async_trait]
pub trait DocumentStore<T>: Send + Sync {
    /// Load the full ordered sequence of records from the document
    async fn load(&self) -> StoreResult<Vec<T>>;

    /// Serialize the full sequence back, overwriting the document
    async fn save(&self, records: &[T]) -> StoreResult<()>;
}

/// File-backed JSON document store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the document at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl<T> DocumentStore<T> for JsonFileStore
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn load(&self) -> StoreResult<Vec<T>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        serde_json::from_str(&content).map_err(|e| StoreError::InvalidDocument {
            message: e.to_string(),
        })
    }

    async fn save(&self, records: &[T]) -> StoreResult<()> {
        let body = to_pretty_json(records)?;
        let temp = self.temp_path();

        tokio::fs::write(&temp, &body).await?;
        tokio::fs::rename(&temp, &self.path).await?;

        log::debug!(
            "Persisted {} record(s) to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Serialize records pretty-printed with 4-space indentation
fn to_pretty_json<T: Serialize>(records: &[T]) -> StoreResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);

    records
        .serialize(&mut ser)
        .map_err(|e| StoreError::SerializeFailed {
            message: e.to_string(),
        })?;

    Ok(buf)
}

// ==================== Tests ====================
