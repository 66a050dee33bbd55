//! Type definitions for property paths.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::util::parse_property_path;
use crate::validate::validate_segments;
use crate::PathError;

/// A single step of a property path: one object key.
pub type Segment = String;

/// A parsed dot-separated property path.
///
/// Always holds at least one segment, and no segment is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    segments: Vec<Segment>,
}

impl PropertyPath {
    /// Parse the dotted form, e.g. `"author.name"`.
    pub fn parse(path: &str) -> Result<Self, PathError> {
        Ok(Self {
            segments: parse_property_path(path)?,
        })
    }

    /// Build a path from already split segments.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<Segment> = segments.into_iter().map(Into::into).collect();
        validate_segments(&segments)?;
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments; always at least 1.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The final segment, i.e. the key of the leaf inside its parent.
    pub fn last(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Segments leading to the parent mapping of the leaf.
    pub fn intermediate(&self) -> &[Segment] {
        &self.segments[..self.segments.len() - 1]
    }

    /// Parent path, or `None` when the leaf sits directly under the root.
    pub fn parent(&self) -> Option<PropertyPath> {
        match self.intermediate() {
            [] => None,
            rest => Some(Self {
                segments: rest.to_vec(),
            }),
        }
    }

    /// Dotted form of the first `n` segments.
    pub fn prefix(&self, n: usize) -> String {
        self.segments[..n.min(self.segments.len())].join(".")
    }

    /// Whether `self` lies strictly below `ancestor`.
    pub fn is_child_of(&self, ancestor: &PropertyPath) -> bool {
        crate::util::is_child(&ancestor.segments, &self.segments)
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl FromStr for PropertyPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PropertyPath {
    type Error = PathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for PropertyPath {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// Write access to one leaf slot: the mapping that holds the leaf and the
/// leaf's key. The leaf itself may or may not exist yet.
#[derive(Debug)]
pub struct PathHandle<'a> {
    parent: &'a mut Map<String, Value>,
    path: &'a PropertyPath,
}

impl<'a> PathHandle<'a> {
    pub(crate) fn new(parent: &'a mut Map<String, Value>, path: &'a PropertyPath) -> Self {
        Self { parent, path }
    }

    /// Full path of the leaf.
    pub fn path(&self) -> &PropertyPath {
        self.path
    }

    pub fn key(&self) -> &str {
        self.path.last()
    }

    /// Whether the leaf key exists. A key holding `null` exists.
    pub fn contains(&self) -> bool {
        self.parent.contains_key(self.key())
    }

    pub fn get(&self) -> Option<&Value> {
        self.parent.get(self.path.last())
    }

    pub fn get_mut(&mut self) -> Option<&mut Value> {
        self.parent.get_mut(self.path.last())
    }

    /// Set the leaf, returning the previous value if there was one.
    pub fn insert(&mut self, value: Value) -> Option<Value> {
        self.parent.insert(self.path.last().to_string(), value)
    }

    /// Remove the leaf key, keeping the order of the remaining keys.
    pub fn remove(&mut self) -> Option<Value> {
        self.parent.shift_remove(self.path.last())
    }

    /// The mapping holding the leaf.
    pub fn parent(&self) -> &Map<String, Value> {
        self.parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_and_display() {
        let path = PropertyPath::parse("a.b.c").unwrap();
        assert_eq!(path.depth(), 3);
        assert_eq!(path.last(), "c");
        assert_eq!(path.to_string(), "a.b.c");
    }

    #[test]
    fn test_from_str() {
        let path: PropertyPath = "author.name".parse().unwrap();
        assert_eq!(path.segments(), &["author".to_string(), "name".to_string()]);
        assert!("".parse::<PropertyPath>().is_err());
    }

    #[test]
    fn test_from_segments() {
        let path = PropertyPath::from_segments(["a", "b"]).unwrap();
        assert_eq!(path.to_string(), "a.b");
        assert!(PropertyPath::from_segments(Vec::<String>::new()).is_err());
        assert!(PropertyPath::from_segments(["a.b"]).is_err());
    }

    #[test]
    fn test_parent_and_prefix() {
        let path = PropertyPath::parse("a.b.c").unwrap();
        assert_eq!(path.parent().unwrap().to_string(), "a.b");
        assert_eq!(path.prefix(1), "a");
        assert_eq!(path.prefix(2), "a.b");
        assert_eq!(path.prefix(10), "a.b.c");
        assert_eq!(path.intermediate(), &["a".to_string(), "b".to_string()]);

        let top = PropertyPath::parse("a").unwrap();
        assert!(top.parent().is_none());
        assert!(top.intermediate().is_empty());
    }

    #[test]
    fn test_is_child_of() {
        let a = PropertyPath::parse("a").unwrap();
        let ab = PropertyPath::parse("a.b").unwrap();
        assert!(ab.is_child_of(&a));
        assert!(!a.is_child_of(&ab));
        assert!(!a.is_child_of(&a));
    }

    #[test]
    fn test_handle_insert_and_remove() {
        let mut map = Map::new();
        map.insert("x".to_string(), json!(1));
        map.insert("y".to_string(), json!(2));
        map.insert("z".to_string(), json!(3));
        let path = PropertyPath::parse("y").unwrap();

        let mut handle = PathHandle::new(&mut map, &path);
        assert!(handle.contains());
        assert_eq!(handle.get(), Some(&json!(2)));
        assert_eq!(handle.insert(json!(20)), Some(json!(2)));
        assert_eq!(handle.remove(), Some(json!(20)));
        assert!(!handle.contains());
        assert_eq!(handle.key(), "y");
    }

    #[test]
    fn test_handle_null_leaf_exists() {
        let mut map = Map::new();
        map.insert("n".to_string(), Value::Null);
        let path = PropertyPath::parse("n").unwrap();
        let handle = PathHandle::new(&mut map, &path);
        assert!(handle.contains());
        assert_eq!(handle.get(), Some(&Value::Null));
    }
}
