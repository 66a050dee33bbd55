//! Error type shared by every updater operation.

use std::path::PathBuf;

use json_updater_path::{PathError, MAX_PATH_LENGTH};
use thiserror::Error;

use crate::kind::ValueKind;

/// Errors returned by [`Updater`](crate::Updater) operations.
///
/// Variants that refer to a property carry the dotted path accumulated at the
/// point of failure, not just the failing segment.
#[derive(Debug, Error)]
pub enum Error {
    /// The document location does not exist in the store.
    #[error("Document {} not found", .location.display())]
    NotFound { location: PathBuf },

    #[error("Failed to access {}: {source}", .location.display())]
    Io {
        location: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored text is not valid JSON.
    #[error("Document {} is not valid JSON: {source}", .location.display())]
    Parse {
        location: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Invalid property path \"{path}\"")]
    InvalidPath { path: String },

    #[error("Property path has {len} segments, more than the allowed {max}", max = MAX_PATH_LENGTH)]
    PathTooLong { len: usize },

    /// A segment is absent where presence is required.
    #[error("Property \"{path}\" not defined")]
    PropertyNotFound { path: String },

    /// `add` targeted a key that already exists.
    #[error("Property \"{path}\" already defined")]
    PropertyAlreadyDefined { path: String },

    /// An intermediate segment holds something other than an object.
    #[error("Property \"{path}\" is not an object")]
    PathConflict { path: String },

    /// The incoming value's type is not accepted for the existing leaf.
    #[error("Property \"{path}\" holds {expected}, got {found}")]
    MismatchedType {
        path: String,
        expected: ValueKind,
        found: ValueKind,
    },

    /// `append` against a number, boolean or null leaf.
    #[error("Cannot append to {kind} property \"{path}\"")]
    CannotAppend { path: String, kind: ValueKind },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<PathError> for Error {
    fn from(err: PathError) -> Self {
        match err {
            PathError::InvalidPath { path } => Error::InvalidPath { path },
            PathError::PathTooLong { len } => Error::PathTooLong { len },
            PathError::PropertyNotFound { path } => Error::PropertyNotFound { path },
            PathError::PathConflict { path } => Error::PathConflict { path },
        }
    }
}

impl Error {
    /// The dotted property path the error refers to, if any.
    pub fn property_path(&self) -> Option<&str> {
        match self {
            Error::InvalidPath { path }
            | Error::PropertyNotFound { path }
            | Error::PropertyAlreadyDefined { path }
            | Error::PathConflict { path }
            | Error::MismatchedType { path, .. }
            | Error::CannotAppend { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
