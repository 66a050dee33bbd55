//! Dot-separated property paths for JSON objects.
//!
//! A property path such as `"author.name"` names one key per level of a
//! nested JSON object. This crate parses and validates those paths and
//! resolves them inside a [`serde_json::Value`] document, either to read a
//! leaf or to obtain a [`PathHandle`] (parent mapping + final key) for
//! writing it.
//!
//! # Example
//!
//! ```
//! use json_updater_path::{resolve_for_write, PropertyPath};
//! use serde_json::json;
//!
//! let mut doc = json!({});
//! let path = PropertyPath::parse("earth.india.karnataka").unwrap();
//!
//! let mut handle = resolve_for_write(&mut doc, &path, true).unwrap();
//! assert!(!handle.contains());
//! handle.insert(json!({"capital": "Bengaluru"}));
//!
//! assert_eq!(
//!     doc,
//!     json!({"earth": {"india": {"karnataka": {"capital": "Bengaluru"}}}})
//! );
//! ```

use thiserror::Error;

pub mod get;
pub mod resolve;
pub mod types;
pub mod util;
pub mod validate;

pub use get::{get, get_mut};
pub use resolve::{delete_paths, resolve_for_delete, resolve_for_write};
pub use types::{PathHandle, PropertyPath, Segment};
pub use util::{is_child, parse_property_path};
pub use validate::{validate_property_path, validate_segments, MAX_PATH_LENGTH, SEPARATOR};

/// Errors raised while parsing or resolving a property path.
///
/// Every variant that refers to a location carries the dotted path
/// accumulated up to and including the failing segment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Invalid property path \"{path}\"")]
    InvalidPath { path: String },
    #[error("Property path has {len} segments, more than the allowed {max}", max = MAX_PATH_LENGTH)]
    PathTooLong { len: usize },
    #[error("Property \"{path}\" not defined")]
    PropertyNotFound { path: String },
    #[error("Property \"{path}\" is not an object")]
    PathConflict { path: String },
}

impl PathError {
    /// The dotted path the error refers to, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            PathError::InvalidPath { path }
            | PathError::PropertyNotFound { path }
            | PathError::PathConflict { path } => Some(path),
            PathError::PathTooLong { .. } => None,
        }
    }
}
