//! Updater configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How `update` treats an incoming value whose structure does not fit the
/// existing leaf (an object replaced by a scalar, a scalar by an array...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// The incoming value replaces the leaf.
    #[default]
    Permissive,
    /// The update fails with `MismatchedType`.
    Strict,
}

/// Options shared by every operation of an [`Updater`](crate::Updater).
///
/// Deserializable, so it can be kept in a TOML file:
///
/// ```
/// use json_updater::{Strictness, UpdaterOptions};
///
/// let options = UpdaterOptions::from_toml_str(
///     r#"
///     strictness = "strict"
///     indent = 4
///     "#,
/// )
/// .unwrap();
/// assert_eq!(options.strictness, Strictness::Strict);
/// assert_eq!(options.indent, 4);
/// assert!(!options.trailing_newline);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpdaterOptions {
    pub strictness: Strictness,
    /// Spaces per indentation level in the written document.
    pub indent: usize,
    /// Sort the keys of objects produced by `append` merges.
    pub sort_appended_keys: bool,
    /// Terminate the written document with a newline.
    pub trailing_newline: bool,
}

impl Default for UpdaterOptions {
    fn default() -> Self {
        Self {
            strictness: Strictness::Permissive,
            indent: 2,
            sort_appended_keys: false,
            trailing_newline: false,
        }
    }
}

impl UpdaterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_sort_appended_keys(mut self, sort: bool) -> Self {
        self.sort_appended_keys = sort;
        self
    }

    pub fn with_trailing_newline(mut self, newline: bool) -> Self {
        self.trailing_newline = newline;
        self
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read options from a TOML file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| Error::Io {
                location: path.to_path_buf(),
                source,
            })?;
        let options = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?options, "loaded updater options");
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = UpdaterOptions::default();
        assert_eq!(options.strictness, Strictness::Permissive);
        assert_eq!(options.indent, 2);
        assert!(!options.sort_appended_keys);
        assert!(!options.trailing_newline);
    }

    #[test]
    fn builder_methods() {
        let options = UpdaterOptions::new()
            .with_strictness(Strictness::Strict)
            .with_indent(4)
            .with_sort_appended_keys(true)
            .with_trailing_newline(true);
        assert_eq!(options.strictness, Strictness::Strict);
        assert_eq!(options.indent, 4);
        assert!(options.sort_appended_keys);
        assert!(options.trailing_newline);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            UpdaterOptions::from_toml_str("").unwrap(),
            UpdaterOptions::default()
        );
    }

    #[test]
    fn unknown_toml_key_is_rejected() {
        let err = UpdaterOptions::from_toml_str("colour = true").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn bad_strictness_is_rejected() {
        assert!(UpdaterOptions::from_toml_str("strictness = \"lenient\"").is_err());
    }

    #[tokio::test]
    async fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("updater.toml");
        std::fs::write(&path, "sort_appended_keys = true\ntrailing_newline = true\n").unwrap();

        let options = UpdaterOptions::load(&path).await.unwrap();
        assert!(options.sort_appended_keys);
        assert!(options.trailing_newline);
        assert_eq!(options.indent, 2);
    }

    #[tokio::test]
    async fn load_missing_file() {
        let err = UpdaterOptions::load("/nonexistent/updater.toml")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
