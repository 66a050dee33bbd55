//! The operation surface bound to one document location.

use std::path::{Path, PathBuf};

use json_updater_path::{get as lookup, PathError, PropertyPath};
use serde_json::Value;
use tracing::debug;

use crate::codec::{parse_document, serialize_document};
use crate::error::{Error, Result};
use crate::operation::{apply_operation, Operation};
use crate::options::UpdaterOptions;
use crate::store::{DocumentStore, FsStore};

/// One path or a collection of paths, as accepted by [`Updater::delete`].
pub trait IntoPropertyPaths {
    fn into_property_paths(self) -> Result<Vec<PropertyPath>, PathError>;
}

impl IntoPropertyPaths for &str {
    fn into_property_paths(self) -> Result<Vec<PropertyPath>, PathError> {
        Ok(vec![PropertyPath::parse(self)?])
    }
}

impl IntoPropertyPaths for String {
    fn into_property_paths(self) -> Result<Vec<PropertyPath>, PathError> {
        self.as_str().into_property_paths()
    }
}

impl IntoPropertyPaths for &String {
    fn into_property_paths(self) -> Result<Vec<PropertyPath>, PathError> {
        self.as_str().into_property_paths()
    }
}

impl IntoPropertyPaths for PropertyPath {
    fn into_property_paths(self) -> Result<Vec<PropertyPath>, PathError> {
        Ok(vec![self])
    }
}

impl<T: AsRef<str>> IntoPropertyPaths for &[T] {
    fn into_property_paths(self) -> Result<Vec<PropertyPath>, PathError> {
        if self.is_empty() {
            return Err(PathError::InvalidPath {
                path: String::new(),
            });
        }
        self.iter()
            .map(|path| PropertyPath::parse(path.as_ref()))
            .collect()
    }
}

impl<T: AsRef<str>> IntoPropertyPaths for Vec<T> {
    fn into_property_paths(self) -> Result<Vec<PropertyPath>, PathError> {
        self.as_slice().into_property_paths()
    }
}

impl<T: AsRef<str>, const N: usize> IntoPropertyPaths for [T; N] {
    fn into_property_paths(self) -> Result<Vec<PropertyPath>, PathError> {
        self.as_slice().into_property_paths()
    }
}

/// Edits the JSON document stored at one location.
///
/// Every operation loads the document fresh, applies one mutation in memory
/// and writes the whole document back. A failed operation never writes.
///
/// No locking is done: concurrent operations on the same location race and
/// the last write wins. Serialize access externally when that matters.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> json_updater::Result<()> {
/// use serde_json::json;
///
/// let pkg = json_updater::open("package.json");
/// pkg.update("keywords", json!("cli")).await?;
/// pkg.add("scripts.lint", json!("eslint .")).await?;
/// pkg.delete(["private", "scripts.prepublish"]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Updater<S = FsStore> {
    store: S,
    location: PathBuf,
    options: UpdaterOptions,
}

/// An [`Updater`] for a file on the local filesystem, with default options.
pub fn open(location: impl Into<PathBuf>) -> Updater<FsStore> {
    Updater::new(FsStore::new(), location)
}

impl<S: DocumentStore> Updater<S> {
    pub fn new(store: S, location: impl Into<PathBuf>) -> Self {
        Self {
            store,
            location: location.into(),
            options: UpdaterOptions::default(),
        }
    }

    pub fn with_options(mut self, options: UpdaterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn options(&self) -> &UpdaterOptions {
        &self.options
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Insert `value` at a path that does not exist yet.
    pub async fn add(&self, path: &str, value: Value) -> Result<()> {
        let path = PropertyPath::parse(path)?;
        self.execute(Operation::Add { path, value }).await
    }

    /// Merge `value` into the existing leaf at `path`.
    pub async fn update(&self, path: &str, value: Value) -> Result<()> {
        let path = PropertyPath::parse(path)?;
        self.execute(Operation::Update { path, value }).await
    }

    /// Replace the existing leaf at `path` with a value of the same kind.
    pub async fn set(&self, path: &str, value: Value) -> Result<()> {
        let path = PropertyPath::parse(path)?;
        self.execute(Operation::Set { path, value }).await
    }

    /// Append `value` to the existing leaf at `path`.
    ///
    /// With `preserve`, an array leaf receives `value` as one element even
    /// when `value` is itself an array.
    pub async fn append(&self, path: &str, value: Value, preserve: bool) -> Result<()> {
        let path = PropertyPath::parse(path)?;
        self.execute(Operation::Append {
            path,
            value,
            preserve,
        })
        .await
    }

    /// Remove one or more paths. Either all of them are removed or, if any
    /// is missing, none.
    pub async fn delete(&self, paths: impl IntoPropertyPaths) -> Result<()> {
        let paths = paths.into_property_paths()?;
        self.execute(Operation::Delete { paths }).await
    }

    /// Alias for [`Updater::delete`].
    pub async fn remove(&self, paths: impl IntoPropertyPaths) -> Result<()> {
        self.delete(paths).await
    }

    /// Read the value at `path`, `None` if it is not defined.
    pub async fn get(&self, path: &str) -> Result<Option<Value>> {
        let path = PropertyPath::parse(path)?;
        let doc = self.load().await?;
        Ok(lookup(&doc, &path).cloned())
    }

    /// Run one operation: load, apply, serialize, persist.
    pub async fn execute(&self, op: Operation) -> Result<()> {
        let name = op.name();
        debug!(location = %self.location.display(), op = name, "applying operation");

        let mut doc = self.load().await?;
        if let Err(err) = apply_operation(&mut doc, op, &self.options) {
            debug!(
                location = %self.location.display(),
                op = name,
                path = err.property_path().unwrap_or_default(),
                error = %err,
                "operation rejected"
            );
            return Err(err);
        }
        let text = serialize_document(&doc, &self.options)?;
        self.store.write_text(&self.location, &text).await?;

        debug!(location = %self.location.display(), op = name, bytes = text.len(), "document updated");
        Ok(())
    }

    async fn load(&self) -> Result<Value> {
        if !self.store.exists(&self.location).await? {
            return Err(Error::NotFound {
                location: self.location.clone(),
            });
        }
        let text = self.store.read_text(&self.location).await?;
        parse_document(&self.location, &text)
    }
}
