use serde_json::Value;

use crate::types::PropertyPath;

/// Get a value from a JSON document by property path.
///
/// Returns `None` if any segment is missing or crosses a non-object value.
///
/// # Example
///
/// ```
/// use json_updater_path::{get, PropertyPath};
/// use serde_json::json;
///
/// let doc = json!({"author": {"name": "Hage Yaapa"}});
/// let path = PropertyPath::parse("author.name").unwrap();
/// assert_eq!(get(&doc, &path), Some(&json!("Hage Yaapa")));
/// ```
pub fn get<'a>(val: &'a Value, path: &PropertyPath) -> Option<&'a Value> {
    let mut current = val;
    for segment in path.segments() {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by property path.
pub fn get_mut<'a>(val: &'a mut Value, path: &PropertyPath) -> Option<&'a mut Value> {
    let mut current = val;
    for segment in path.segments() {
        current = current.as_object_mut()?.get_mut(segment)?;
    }
    Some(current)
}
