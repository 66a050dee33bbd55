//! json-updater: edit JSON documents on disk by dotted property path.
//!
//! Built for configuration-like files (package manifests, settings) that
//! need small programmatic edits without rewriting them by hand:
//!
//! - [`Updater::add`] inserts a new property, creating intermediate objects;
//! - [`Updater::update`] merges into an existing property (arrays grow,
//!   objects shallow-merge with existing keys winning, scalars are replaced);
//! - [`Updater::set`] replaces a property with a value of the same kind;
//! - [`Updater::append`] appends to an array, object or string;
//! - [`Updater::delete`] removes one or more properties, all or nothing.
//!
//! Each call loads the document, applies the change in memory and writes it
//! back with two-space indentation, keeping the original key order. Nothing
//! is written when the change is rejected.
//!
//! Path resolution lives in the `json-updater-path` crate; this crate adds
//! the merge rules, the [`DocumentStore`] I/O boundary and the
//! `json-update` command-line tool.

pub mod codec;
pub mod error;
pub mod json_cli;
pub mod kind;
pub mod merge;
pub mod operation;
pub mod options;
pub mod store;
pub mod updater;

pub use error::{Error, Result};
pub use kind::{StructuralType, ValueKind};
pub use operation::{apply_operation, Operation};
pub use options::{Strictness, UpdaterOptions};
pub use store::{DocumentStore, FsStore, MemoryStore};
pub use updater::{open, IntoPropertyPaths, Updater};

pub use json_updater_path::{PathError, PropertyPath};
