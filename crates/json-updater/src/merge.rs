//! Value combination rules for `update`, `append` and `set`.
//!
//! Every rule dispatches on the `(existing, incoming)` shape pair. None of
//! them mutate the existing value; the caller writes the result back into
//! the leaf slot.

use serde_json::{Map, Value};

use json_updater_path::PropertyPath;

use crate::error::{Error, Result};
use crate::kind::{StructuralType, ValueKind};
use crate::options::Strictness;

/// Combine `incoming` into `existing` for `update`.
///
/// - array: incoming elements are appended (a non-array is appended as one
///   element);
/// - object + object: shallow merge, existing keys win;
/// - scalar + scalar: incoming replaces;
/// - anything else depends on `strictness`.
pub fn merge_values(
    existing: &Value,
    incoming: Value,
    path: &PropertyPath,
    strictness: Strictness,
) -> Result<Value> {
    match (existing, incoming) {
        (Value::Array(items), incoming) => Ok(Value::Array(concat(items, incoming))),
        (Value::Object(current), Value::Object(incoming)) => {
            Ok(Value::Object(merge_mappings(current, incoming)))
        }
        (existing, incoming) => {
            let expected = ValueKind::of(existing);
            let found = ValueKind::of(&incoming);
            if expected.structural() == found.structural() || strictness == Strictness::Permissive
            {
                Ok(incoming)
            } else {
                Err(mismatch(path, expected, found))
            }
        }
    }
}

/// Combine `incoming` into `existing` for `append`.
///
/// With `preserve`, an array target receives `incoming` as a single new
/// element. Otherwise arrays concatenate like [`merge_values`], objects
/// shallow-merge with existing keys winning, and strings concatenate as text.
/// Numbers, booleans and null cannot be appended to.
pub fn append_values(
    existing: &Value,
    incoming: Value,
    path: &PropertyPath,
    preserve: bool,
    sort_keys: bool,
) -> Result<Value> {
    match (existing, incoming) {
        (Value::Array(items), incoming) if preserve => {
            let mut items = items.clone();
            items.push(incoming);
            Ok(Value::Array(items))
        }
        (Value::Array(items), incoming) => Ok(Value::Array(concat(items, incoming))),
        (Value::Object(current), Value::Object(incoming)) => {
            let merged = merge_mappings(current, incoming);
            Ok(Value::Object(if sort_keys {
                sorted(merged)
            } else {
                merged
            }))
        }
        (Value::String(text), Value::String(more)) => Ok(Value::String(format!("{text}{more}"))),
        (Value::Number(_) | Value::Bool(_) | Value::Null, _) => Err(Error::CannotAppend {
            path: path.to_string(),
            kind: ValueKind::of(existing),
        }),
        (existing, incoming) => Err(mismatch(
            path,
            ValueKind::of(existing),
            ValueKind::of(&incoming),
        )),
    }
}

/// Check `incoming` against `existing` for `set`; returns the value to store.
///
/// The kinds must match exactly. A `null` leaf is a scalar placeholder and
/// accepts any scalar, but never an object or array.
pub fn set_value(existing: &Value, incoming: Value, path: &PropertyPath) -> Result<Value> {
    let expected = ValueKind::of(existing);
    let found = ValueKind::of(&incoming);
    let placeholder =
        expected == ValueKind::Null && found.structural() == StructuralType::Scalar;
    if expected == found || placeholder {
        Ok(incoming)
    } else {
        Err(mismatch(path, expected, found))
    }
}

fn concat(items: &[Value], incoming: Value) -> Vec<Value> {
    let mut out = items.to_vec();
    match incoming {
        Value::Array(more) => out.extend(more),
        other => out.push(other),
    }
    out
}

/// Existing keys keep their position and value; keys only present in
/// `incoming` follow in incoming order.
fn merge_mappings(existing: &Map<String, Value>, incoming: Map<String, Value>) -> Map<String, Value> {
    let mut out = existing.clone();
    for (key, value) in incoming {
        out.entry(key).or_insert(value);
    }
    out
}

fn sorted(map: Map<String, Value>) -> Map<String, Value> {
    let mut entries: Vec<(String, Value)> = map.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries.into_iter().collect()
}

fn mismatch(path: &PropertyPath, expected: ValueKind, found: ValueKind) -> Error {
    Error::MismatchedType {
        path: path.to_string(),
        expected,
        found,
    }
}
