use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::trace;

use super::DocumentStore;
use crate::error::{Error, Result};

/// Keeps documents in memory, keyed by location.
///
/// Counts successful writes so callers can check that a failed operation
/// never reached the store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<PathBuf, String>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document.
    pub fn with_document(mut self, location: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.documents
            .get_mut()
            .insert(location.into(), text.into());
        self
    }

    /// Current text of the document at `location`.
    pub async fn document(&self, location: impl AsRef<Path>) -> Option<String> {
        self.documents.lock().await.get(location.as_ref()).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn exists(&self, location: &Path) -> Result<bool> {
        Ok(self.documents.lock().await.contains_key(location))
    }

    async fn read_text(&self, location: &Path) -> Result<String> {
        self.documents
            .lock()
            .await
            .get(location)
            .cloned()
            .ok_or_else(|| Error::NotFound {
                location: location.to_path_buf(),
            })
    }

    async fn write_text(&self, location: &Path, text: &str) -> Result<()> {
        self.documents
            .lock()
            .await
            .insert(location.to_path_buf(), text.to_string());
        let writes = self.writes.fetch_add(1, Ordering::SeqCst) + 1;
        trace!(location = %location.display(), bytes = text.len(), writes, "stored document");
        Ok(())
    }
}
