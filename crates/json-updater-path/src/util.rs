use crate::validate::{validate_property_path, SEPARATOR};
use crate::PathError;

/// Parse a dotted property path into its segments.
///
/// # Example
///
/// ```
/// use json_updater_path::parse_property_path;
///
/// assert_eq!(parse_property_path("a.b").unwrap(), vec!["a", "b"]);
/// assert!(parse_property_path("a..b").is_err());
/// ```
pub fn parse_property_path(path: &str) -> Result<Vec<String>, PathError> {
    validate_property_path(path)?;
    Ok(path.split(SEPARATOR).map(str::to_string).collect())
}

/// Check if `parent` path contains the `child` path.
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    parent.len() < child.len() && child[..parent.len()] == *parent
}
