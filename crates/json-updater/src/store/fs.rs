use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use tracing::trace;

use super::DocumentStore;
use crate::error::{Error, Result};

/// Stores documents as files on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl FsStore {
    pub fn new() -> Self {
        Self
    }
}

fn io_error(location: &Path, source: std::io::Error) -> Error {
    if source.kind() == ErrorKind::NotFound {
        Error::NotFound {
            location: location.to_path_buf(),
        }
    } else {
        Error::Io {
            location: location.to_path_buf(),
            source,
        }
    }
}

#[async_trait]
impl DocumentStore for FsStore {
    async fn exists(&self, location: &Path) -> Result<bool> {
        let exists = tokio::fs::try_exists(location)
            .await
            .map_err(|source| io_error(location, source))?;
        trace!(location = %location.display(), exists, "checked document");
        Ok(exists)
    }

    async fn read_text(&self, location: &Path) -> Result<String> {
        let text = tokio::fs::read_to_string(location)
            .await
            .map_err(|source| io_error(location, source))?;
        trace!(location = %location.display(), bytes = text.len(), "read document");
        Ok(text)
    }

    async fn write_text(&self, location: &Path, text: &str) -> Result<()> {
        tokio::fs::write(location, text)
            .await
            .map_err(|source| Error::Io {
                location: location.to_path_buf(),
                source,
            })?;
        trace!(location = %location.display(), bytes = text.len(), "wrote document");
        Ok(())
    }
}
