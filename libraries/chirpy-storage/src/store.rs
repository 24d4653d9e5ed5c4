//! File-backed record store

use crate::document::Document;
use crate::error::{Result, StorageError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;

/// Owner of the on-disk [`Document`]
///
/// Construct once at startup and share behind an `Arc`. Every mutation runs as a
/// full load → mutate → persist cycle while holding the write half of the lock;
/// reads hold the read half so they never observe a write in progress.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty document on disk if none exists yet
    pub async fn initialize(&self) -> Result<()> {
        let _guard = self.lock.write().await;
        if self.read_document().await?.is_none() {
            tracing::info!("Creating empty database at {}", self.path.display());
            self.write_document(&Document::default()).await?;
        }
        Ok(())
    }

    /// Read the whole document, synthesizing an empty one if the file is absent
    pub async fn load(&self) -> Result<Document> {
        let _guard = self.lock.read().await;
        Ok(self.read_document().await?.unwrap_or_default())
    }

    /// Replace the stored document with `document`
    pub async fn persist(&self, document: &Document) -> Result<()> {
        let _guard = self.lock.write().await;
        self.write_document(document).await
    }

    /// Run a read-only query against a consistent snapshot
    pub(crate) async fn read<T>(&self, query: impl FnOnce(&Document) -> Result<T>) -> Result<T> {
        let _guard = self.lock.read().await;
        let document = self.read_document().await?.unwrap_or_default();
        query(&document)
    }

    /// Load, apply `mutation`, and persist the result as one serialized step.
    ///
    /// Nothing is written when `mutation` fails.
    pub(crate) async fn write<T>(
        &self,
        mutation: impl FnOnce(&mut Document) -> Result<T>,
    ) -> Result<T> {
        let _guard = self.lock.write().await;
        let mut document = self.read_document().await?.unwrap_or_default();
        let output = mutation(&mut document)?;
        self.write_document(&document).await?;
        Ok(output)
    }

    /// Raw read: `None` only when the file does not exist.
    async fn read_document(&self) -> Result<Option<Document>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let document = serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(document))
    }

    /// Serialize to a sibling temp file, then rename over the target so readers
    /// see either the old document or the new one.
    async fn write_document(&self, document: &Document) -> Result<()> {
        let data = serde_json::to_vec_pretty(document)?;
        let tmp_path = self.tmp_path();
        let write_err = |source: std::io::Error| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(write_err)?;
            }
        }

        fs::write(&tmp_path, &data).await.map_err(write_err)?;
        fs::rename(&tmp_path, &self.path).await.map_err(write_err)?;

        tracing::debug!(
            path = %self.path.display(),
            bytes = data.len(),
            "Persisted document"
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
