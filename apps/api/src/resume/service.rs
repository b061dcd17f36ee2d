use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::resume::merge::{deep_merge, shallow_overwrite};
use crate::store::DocumentStore;

pub const SECTION_NOT_FOUND: &str = "Section not found";
pub const NO_DATA_PROVIDED: &str = "No data provided";
pub const NO_UPDATE_DATA_PROVIDED: &str = "No update data provided";
pub const REQUIRED_FIELDS_MISSING: &str = "Required fields missing";

/// Transport-independent operations on the résumé document.
///
/// Each call loads fresh from the store. Mutations take the write gate for
/// their load+store pair, so within one process they never interleave; a
/// second process writing the same file can still race (last store wins).
#[derive(Clone)]
pub struct ResumeService {
    store: Arc<dyn DocumentStore>,
    write_gate: Arc<Mutex<()>>,
}

impl ResumeService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    pub async fn get_all(&self) -> Result<ResumeDocument, AppError> {
        Ok(self.store.load().await?)
    }

    pub async fn get_section(&self, name: &str) -> Result<Value, AppError> {
        let mut doc = self.store.load().await?;
        doc.remove(name)
            .ok_or_else(|| AppError::NotFound(SECTION_NOT_FOUND.to_string()))
    }

    /// Overwrites the whole document. Sections absent from `doc` are dropped.
    pub async fn replace_all(&self, doc: ResumeDocument) -> Result<(), AppError> {
        let missing = doc.missing_required();
        if !missing.is_empty() {
            info!("Rejected full replace; missing or empty: {}", missing.join(", "));
            return Err(AppError::Validation(REQUIRED_FIELDS_MISSING.to_string()));
        }

        let _guard = self.write_gate.lock().await;
        // Result unused; the load still initialises a missing store.
        self.store.load().await?;
        self.store.store(&doc).await?;
        info!("Replaced resume document ({} sections)", doc.section_count());
        Ok(())
    }

    /// Deep-merges `partial` into the stored document.
    pub async fn merge_update(&self, partial: Map<String, Value>) -> Result<(), AppError> {
        if partial.is_empty() {
            return Err(AppError::Validation(NO_UPDATE_DATA_PROVIDED.to_string()));
        }
        let sections = section_list(&partial);

        let _guard = self.write_gate.lock().await;
        let mut doc = self.store.load().await?;
        deep_merge(doc.as_map_mut(), partial);
        self.store.store(&doc).await?;
        info!("Merged update into sections: {sections}");
        Ok(())
    }

    /// Replaces each supplied top-level section outright, without recursing.
    pub async fn add_or_overwrite(&self, partial: Map<String, Value>) -> Result<(), AppError> {
        if partial.is_empty() {
            return Err(AppError::Validation(NO_DATA_PROVIDED.to_string()));
        }
        let sections = section_list(&partial);

        let _guard = self.write_gate.lock().await;
        let mut doc = self.store.load().await?;
        shallow_overwrite(doc.as_map_mut(), partial);
        self.store.store(&doc).await?;
        info!("Overwrote top-level sections: {sections}");
        Ok(())
    }

    pub async fn delete_section(&self, name: &str) -> Result<(), AppError> {
        let _guard = self.write_gate.lock().await;
        let mut doc = self.store.load().await?;
        if doc.remove(name).is_none() {
            return Err(AppError::NotFound(SECTION_NOT_FOUND.to_string()));
        }
        self.store.store(&doc).await?;
        info!("Deleted section '{name}'");
        Ok(())
    }
}

fn section_list(partial: &Map<String, Value>) -> String {
    partial.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}
