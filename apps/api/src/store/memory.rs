use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DocumentStore, StoreError};
use crate::models::resume::ResumeDocument;

/// In-memory store for tests. Counts calls so callers can check
/// how many loads and stores an operation performed.
#[derive(Debug, Default)]
pub struct MemoryStore {
    doc: RwLock<Option<ResumeDocument>>,
    loads: AtomicUsize,
    stores: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(doc: ResumeDocument) -> Self {
        Self {
            doc: RwLock::new(Some(doc)),
            ..Self::default()
        }
    }

    pub async fn snapshot(&self) -> Option<ResumeDocument> {
        self.doc.read().await.clone()
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn stores(&self) -> usize {
        self.stores.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self) -> Result<ResumeDocument, StoreError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let mut guard = self.doc.write().await;
        Ok(guard.get_or_insert_with(ResumeDocument::new).clone())
    }

    async fn store(&self, doc: &ResumeDocument) -> Result<(), StoreError> {
        self.stores.fetch_add(1, Ordering::SeqCst);
        *self.doc.write().await = Some(doc.clone());
        Ok(())
    }
}
