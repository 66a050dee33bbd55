//! Document operations, applied in memory without any I/O.

use json_updater_path::{delete_paths, resolve_for_write, PropertyPath};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::merge::{append_values, merge_values, set_value};
use crate::options::UpdaterOptions;

/// One mutation of a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Insert a new leaf, creating intermediate objects.
    Add { path: PropertyPath, value: Value },
    /// Merge into an existing leaf.
    Update { path: PropertyPath, value: Value },
    /// Replace an existing leaf with a value of the same kind.
    Set { path: PropertyPath, value: Value },
    /// Append to an existing array, object or string leaf.
    Append {
        path: PropertyPath,
        value: Value,
        preserve: bool,
    },
    /// Remove every listed leaf, or none.
    Delete { paths: Vec<PropertyPath> },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Update { .. } => "update",
            Operation::Set { .. } => "set",
            Operation::Append { .. } => "append",
            Operation::Delete { .. } => "delete",
        }
    }
}

/// Apply `op` to `doc`.
///
/// On error `doc` may hold intermediate objects created during resolution;
/// callers must discard it rather than persist it.
///
/// # Example
///
/// ```
/// use json_updater::{apply_operation, Operation, UpdaterOptions};
/// use json_updater_path::PropertyPath;
/// use serde_json::json;
///
/// let mut doc = json!({"tags": ["node"]});
/// let op = Operation::Update {
///     path: PropertyPath::parse("tags").unwrap(),
///     value: json!("cool"),
/// };
/// apply_operation(&mut doc, op, &UpdaterOptions::default()).unwrap();
/// assert_eq!(doc, json!({"tags": ["node", "cool"]}));
/// ```
pub fn apply_operation(doc: &mut Value, op: Operation, options: &UpdaterOptions) -> Result<()> {
    match op {
        Operation::Add { path, value } => {
            let mut handle = resolve_for_write(doc, &path, true)?;
            if handle.contains() {
                return Err(Error::PropertyAlreadyDefined {
                    path: path.to_string(),
                });
            }
            handle.insert(value);
        }
        Operation::Update { path, value } => {
            let mut handle = resolve_for_write(doc, &path, false)?;
            let existing = handle.get().ok_or_else(|| not_found(&path))?;
            let merged = merge_values(existing, value, &path, options.strictness)?;
            handle.insert(merged);
        }
        Operation::Set { path, value } => {
            let mut handle = resolve_for_write(doc, &path, false)?;
            let existing = handle.get().ok_or_else(|| not_found(&path))?;
            let replaced = set_value(existing, value, &path)?;
            handle.insert(replaced);
        }
        Operation::Append {
            path,
            value,
            preserve,
        } => {
            let mut handle = resolve_for_write(doc, &path, false)?;
            let existing = handle.get().ok_or_else(|| not_found(&path))?;
            let appended =
                append_values(existing, value, &path, preserve, options.sort_appended_keys)?;
            handle.insert(appended);
        }
        Operation::Delete { paths } => {
            delete_paths(doc, &paths)?;
        }
    }
    Ok(())
}

fn not_found(path: &PropertyPath) -> Error {
    Error::PropertyNotFound {
        path: path.to_string(),
    }
}
