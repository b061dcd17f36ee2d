// Persistence adapter for the résumé document.
// Every operation goes to storage; nothing is cached between requests.

pub mod file;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::resume::ResumeDocument;

pub use file::FileStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Stored document root is not a JSON object")]
    NotAnObject,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads the current document. An absent store is initialised to `{}`.
    async fn load(&self) -> Result<ResumeDocument, StoreError>;

    /// Replaces the stored document in full.
    async fn store(&self, doc: &ResumeDocument) -> Result<(), StoreError>;
}
