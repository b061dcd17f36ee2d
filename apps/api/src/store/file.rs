use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use super::{DocumentStore, StoreError};
use crate::models::resume::ResumeDocument;

/// JSON file on local disk holding the whole document, pretty-printed.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `content` to a fresh sibling temp file and returns its path.
    async fn write_temp(&self, content: &str) -> std::io::Result<PathBuf> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        tokio::fs::create_dir_all(&dir).await?;

        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume");
        let tmp_path = dir.join(format!(
            ".{}.{}.tmp",
            file_name,
            uuid::Uuid::new_v4().simple()
        ));

        let write_result = async {
            let mut file = tokio::fs::File::create(&tmp_path).await?;
            file.write_all(content.as_bytes()).await?;
            file.flush().await?;
            file.sync_all().await?;
            Ok::<(), std::io::Error>(())
        }
        .await;

        match write_result {
            Ok(()) => Ok(tmp_path),
            Err(e) => {
                let _ = tokio::fs::remove_file(&tmp_path).await;
                Err(e)
            }
        }
    }

    /// Writes via a sibling temp file + rename so readers never see a torn file.
    async fn write_atomic(&self, content: &str) -> Result<(), StoreError> {
        let tmp_path = self.write_temp(content).await?;

        let rename_result = match tokio::fs::rename(&tmp_path, &self.path).await {
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                match tokio::fs::remove_file(&self.path).await {
                    Ok(()) => tokio::fs::rename(&tmp_path, &self.path).await,
                    Err(e) => Err(e),
                }
            }
            other => other,
        };

        if let Err(e) = rename_result {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(StoreError::Io(e));
        }
        Ok(())
    }

    /// Publishes an empty document only if no file exists yet.
    ///
    /// The hard link never replaces an existing target, so a document stored
    /// between our failed read and this call survives. Returns `false` when
    /// the file was already there.
    async fn create_empty_if_absent(&self) -> Result<bool, StoreError> {
        let content = serde_json::to_string_pretty(&ResumeDocument::new())?;
        let tmp_path = self.write_temp(&content).await?;

        let link_result = tokio::fs::hard_link(&tmp_path, &self.path).await;
        let _ = tokio::fs::remove_file(&tmp_path).await;

        match link_result {
            Ok(()) => {
                info!("Initialised empty resume document at {}", self.path.display());
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn parse(content: &str) -> Result<ResumeDocument, StoreError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        ResumeDocument::from_value(value).map_err(|_| StoreError::NotAnObject)
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn load(&self) -> Result<ResumeDocument, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if self.create_empty_if_absent().await? {
                    return Ok(ResumeDocument::new());
                }
                // Someone else created the file first; read what they wrote.
                let content = tokio::fs::read_to_string(&self.path).await?;
                Self::parse(&content)
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn store(&self, doc: &ResumeDocument) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(doc)?;
        self.write_atomic(&content).await?;
        debug!(
            "Stored resume document ({} sections) to {}",
            doc.section_count(),
            self.path.display()
        );
        Ok(())
    }
}
