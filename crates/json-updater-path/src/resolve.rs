//! Path resolution inside a JSON object graph.
//!
//! Resolution always starts at the document root. Nothing here keeps a
//! cursor between calls, so resolving several paths one after another never
//! lets one path's traversal leak into the next.

use serde_json::{Map, Value};

use crate::types::{PathHandle, PropertyPath};
use crate::PathError;

/// Walk to the parent mapping of `path`'s leaf and return a handle to it.
///
/// For every intermediate segment:
/// - present and an object: descend;
/// - present but not an object: [`PathError::PathConflict`];
/// - absent and `create_intermediate`: insert `{}` and descend;
/// - absent otherwise: [`PathError::PropertyNotFound`].
///
/// The final segment is not dereferenced, so the returned handle can be used
/// both to check for and to create the leaf.
///
/// # Example
///
/// ```
/// use json_updater_path::{resolve_for_write, PathError, PropertyPath};
/// use serde_json::json;
///
/// let mut doc = json!({"a": {}});
/// let path = PropertyPath::parse("a.b.c").unwrap();
///
/// let err = resolve_for_write(&mut doc, &path, false).unwrap_err();
/// assert_eq!(err, PathError::PropertyNotFound { path: "a.b".into() });
///
/// let handle = resolve_for_write(&mut doc, &path, true).unwrap();
/// assert_eq!(handle.key(), "c");
/// ```
pub fn resolve_for_write<'a>(
    root: &'a mut Value,
    path: &'a PropertyPath,
    create_intermediate: bool,
) -> Result<PathHandle<'a>, PathError> {
    let mut cursor = match root {
        Value::Object(map) => map,
        _ => {
            return Err(PathError::PathConflict {
                path: String::new(),
            })
        }
    };

    for (idx, segment) in path.intermediate().iter().enumerate() {
        if !cursor.contains_key(segment) {
            if !create_intermediate {
                return Err(PathError::PropertyNotFound {
                    path: path.prefix(idx + 1),
                });
            }
            cursor.insert(segment.clone(), Value::Object(Map::new()));
        }
        cursor = match cursor.get_mut(segment) {
            Some(Value::Object(map)) => map,
            _ => {
                return Err(PathError::PathConflict {
                    path: path.prefix(idx + 1),
                })
            }
        };
    }

    Ok(PathHandle::new(cursor, path))
}

/// Check that every path in `paths` exists and return the leaves in order.
///
/// Each path is walked from `root` on its own. The first path with a missing
/// segment (intermediate or final) fails with
/// [`PathError::PropertyNotFound`] naming the path up to that segment. A
/// scalar or array intermediate has no children, so the error names the
/// segment after it.
pub fn resolve_for_delete<'d>(
    root: &'d Value,
    paths: &[PropertyPath],
) -> Result<Vec<&'d Value>, PathError> {
    let root_map = root.as_object().ok_or_else(|| PathError::PathConflict {
        path: String::new(),
    })?;

    let mut leaves = Vec::with_capacity(paths.len());
    for path in paths {
        let mut cursor = root_map;
        let last = path.depth() - 1;
        for (idx, segment) in path.segments().iter().enumerate() {
            let value = cursor
                .get(segment)
                .ok_or_else(|| PathError::PropertyNotFound {
                    path: path.prefix(idx + 1),
                })?;
            if idx == last {
                leaves.push(value);
            } else {
                cursor = value
                    .as_object()
                    .ok_or_else(|| PathError::PropertyNotFound {
                        path: path.prefix(idx + 2),
                    })?;
            }
        }
    }
    Ok(leaves)
}

/// Remove every path in `paths` from `root`, or none of them.
///
/// All paths are validated with [`resolve_for_delete`] before the first
/// removal; an empty list is [`PathError::InvalidPath`]. Paths whose ancestor
/// was removed earlier in the same call are skipped. Returns the removed
/// values in removal order.
pub fn delete_paths(root: &mut Value, paths: &[PropertyPath]) -> Result<Vec<Value>, PathError> {
    if paths.is_empty() {
        return Err(PathError::InvalidPath {
            path: String::new(),
        });
    }
    resolve_for_delete(root, paths)?;

    let mut done: Vec<&PropertyPath> = Vec::with_capacity(paths.len());
    let mut removed = Vec::with_capacity(paths.len());
    for path in paths {
        if done.iter().any(|gone| path == *gone || path.is_child_of(gone)) {
            continue;
        }
        let mut handle = resolve_for_write(root, path, false)?;
        if let Some(value) = handle.remove() {
            removed.push(value);
        }
        done.push(path);
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(s: &str) -> PropertyPath {
        PropertyPath::parse(s).unwrap()
    }

    fn paths(items: &[&str]) -> Vec<PropertyPath> {
        items.iter().map(|s| path(s)).collect()
    }

    #[test]
    fn test_write_creates_intermediates() {
        let mut doc = json!({});
        let p = path("earth.india.karnataka");
        let mut handle = resolve_for_write(&mut doc, &p, true).unwrap();
        handle.insert(json!({"capital": "Bengaluru"}));
        assert_eq!(
            doc,
            json!({"earth": {"india": {"karnataka": {"capital": "Bengaluru"}}}})
        );
    }

    #[test]
    fn test_write_keeps_existing_siblings() {
        let mut doc = json!({"a": {"x": 1}});
        let p = path("a.y");
        resolve_for_write(&mut doc, &p, true)
            .unwrap()
            .insert(json!(2));
        assert_eq!(doc, json!({"a": {"x": 1, "y": 2}}));
    }

    #[test]
    fn test_write_missing_intermediate_names_partial_path() {
        let mut doc = json!({"a": {"b": {}}});
        let p = path("a.b.c.d");
        let err = resolve_for_write(&mut doc, &p, false).unwrap_err();
        assert_eq!(
            err,
            PathError::PropertyNotFound {
                path: "a.b.c".into()
            }
        );
    }

    #[test]
    fn test_write_scalar_intermediate_conflicts() {
        let mut doc = json!({"name": "pkg"});
        let p = path("name.first");
        let err = resolve_for_write(&mut doc, &p, true).unwrap_err();
        assert_eq!(err, PathError::PathConflict { path: "name".into() });
    }

    #[test]
    fn test_write_array_intermediate_conflicts() {
        let mut doc = json!({"tags": ["a"]});
        let p = path("tags.0");
        let err = resolve_for_write(&mut doc, &p, false).unwrap_err();
        assert_eq!(err, PathError::PathConflict { path: "tags".into() });
    }

    #[test]
    fn test_write_non_object_root() {
        let mut doc = json!([1, 2]);
        let p = path("a");
        let err = resolve_for_write(&mut doc, &p, true).unwrap_err();
        assert_eq!(err, PathError::PathConflict { path: "".into() });
    }

    #[test]
    fn test_write_does_not_dereference_leaf() {
        let mut doc = json!({"a": 1});
        let p = path("a");
        let handle = resolve_for_write(&mut doc, &p, false).unwrap();
        assert_eq!(handle.get(), Some(&json!(1)));
    }

    #[test]
    fn test_delete_resolution_returns_leaves() {
        let doc = json!({"a": {"b": {"c": 1}}, "d": {"e": 2}});
        let leaves = resolve_for_delete(&doc, &paths(&["a.b.c", "d.e"])).unwrap();
        assert_eq!(leaves, vec![&json!(1), &json!(2)]);
    }

    #[test]
    fn test_delete_resolution_restarts_at_root() {
        // `d` also exists below `a.b`; a shared cursor would find the wrong one.
        let doc = json!({"a": {"b": {"c": 1, "d": {"x": 0}}}, "d": {"e": 2}});
        let leaves = resolve_for_delete(&doc, &paths(&["a.b.c", "d.e"])).unwrap();
        assert_eq!(leaves, vec![&json!(1), &json!(2)]);

        let doc = json!({"a": {"b": {"c": 1, "d": {"e": 0}}}});
        let err = resolve_for_delete(&doc, &paths(&["a.b.c", "d.e"])).unwrap_err();
        assert_eq!(err, PathError::PropertyNotFound { path: "d".into() });
    }

    #[test]
    fn test_delete_resolution_missing_final_segment() {
        let doc = json!({"name": "pkg", "version": "1.0.0"});
        let err = resolve_for_delete(&doc, &paths(&["name", "random"])).unwrap_err();
        assert_eq!(
            err,
            PathError::PropertyNotFound {
                path: "random".into()
            }
        );
    }

    #[test]
    fn test_delete_resolution_through_scalar() {
        let doc = json!({"name": "pkg"});
        let err = resolve_for_delete(&doc, &paths(&["name.first"])).unwrap_err();
        assert_eq!(
            err,
            PathError::PropertyNotFound {
                path: "name.first".into()
            }
        );
    }

    #[test]
    fn test_delete_paths_is_all_or_nothing() {
        let mut doc = json!({"name": "pkg", "version": "1.0.0"});
        let before = doc.clone();
        assert!(delete_paths(&mut doc, &paths(&["name", "random"])).is_err());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_delete_paths_preserves_order_of_remaining_keys() {
        let mut doc = json!({"a": 1, "b": 2, "c": 3, "d": 4});
        let removed = delete_paths(&mut doc, &paths(&["b"])).unwrap();
        assert_eq!(removed, vec![json!(2)]);
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_delete_paths_skips_already_removed_descendants() {
        let mut doc = json!({"a": {"b": 1}, "c": 2});
        let removed = delete_paths(&mut doc, &paths(&["a", "a.b"])).unwrap();
        assert_eq!(removed, vec![json!({"b": 1})]);
        assert_eq!(doc, json!({"c": 2}));
    }

    #[test]
    fn test_delete_paths_rejects_empty_list() {
        let mut doc = json!({"a": 1});
        assert_eq!(
            delete_paths(&mut doc, &[]),
            Err(PathError::InvalidPath {
                path: String::new()
            })
        );
        assert_eq!(doc, json!({"a": 1}));
    }

    #[test]
    fn test_delete_paths_through_array_names_next_segment() {
        let mut doc = json!({"tags": ["node"], "a": {"b": 1}});
        let err = delete_paths(&mut doc, &paths(&["a.b", "tags.0"])).unwrap_err();
        assert_eq!(
            err,
            PathError::PropertyNotFound {
                path: "tags.0".into()
            }
        );
        assert_eq!(doc["a"], json!({"b": 1}));
    }

    #[test]
    fn test_delete_paths_repeated_path() {
        let mut doc = json!({"a": 1, "b": 2});
        let removed = delete_paths(&mut doc, &paths(&["a", "a"])).unwrap();
        assert_eq!(removed, vec![json!(1)]);
        assert_eq!(doc, json!({"b": 2}));
    }

    #[test]
    fn test_delete_paths_null_leaf() {
        let mut doc = json!({"a": null});
        let removed = delete_paths(&mut doc, &paths(&["a"])).unwrap();
        assert_eq!(removed, vec![Value::Null]);
        assert_eq!(doc, json!({}));
    }
}
