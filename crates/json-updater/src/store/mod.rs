//! Document stores: where documents are read from and written back to.
//!
//! The [`DocumentStore`] trait is the only I/O boundary of the crate. An
//! [`Updater`](crate::Updater) calls it in a fixed sequence per operation:
//! `exists`, then `read_text`, then (after a successful in-memory mutation)
//! `write_text`. Nothing coordinates concurrent writers; two operations on
//! the same location race and the last write wins.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

pub mod fs;
pub mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

/// Storage backend for JSON documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Whether a document exists at `location`.
    async fn exists(&self, location: &Path) -> Result<bool>;

    /// Read the full text of the document.
    ///
    /// Fails with `Error::NotFound` if there is no document, `Error::Io` for
    /// any other failure.
    async fn read_text(&self, location: &Path) -> Result<String>;

    /// Replace the document text.
    async fn write_text(&self, location: &Path, text: &str) -> Result<()>;
}
