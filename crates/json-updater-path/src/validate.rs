//! Validation functions for property paths.

use crate::PathError;

/// Segment separator in the textual form of a property path.
pub const SEPARATOR: char = '.';

/// Maximum allowed path depth.
pub const MAX_PATH_LENGTH: usize = 256;

/// Validate a dotted property path string.
///
/// # Errors
///
/// Returns an error if:
/// - The path is empty
/// - Any segment is empty (`"a..b"`, `".a"`, `"a."`)
/// - The path has more than [`MAX_PATH_LENGTH`] segments
///
/// # Example
///
/// ```
/// use json_updater_path::validate_property_path;
///
/// validate_property_path("author.name").unwrap();
/// validate_property_path("").unwrap_err();
/// validate_property_path("author..name").unwrap_err();
/// ```
pub fn validate_property_path(path: &str) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::InvalidPath {
            path: path.to_string(),
        });
    }
    let mut len = 0;
    for segment in path.split(SEPARATOR) {
        if segment.is_empty() {
            return Err(PathError::InvalidPath {
                path: path.to_string(),
            });
        }
        len += 1;
    }
    if len > MAX_PATH_LENGTH {
        return Err(PathError::PathTooLong { len });
    }
    Ok(())
}

/// Validate already split path segments.
///
/// Segments must be non-empty and must not contain the separator, otherwise
/// the dotted form of the path would not parse back to the same segments.
pub fn validate_segments(segments: &[String]) -> Result<(), PathError> {
    if segments.is_empty() || segments.iter().any(|s| s.is_empty() || s.contains(SEPARATOR)) {
        return Err(PathError::InvalidPath {
            path: segments.join("."),
        });
    }
    if segments.len() > MAX_PATH_LENGTH {
        return Err(PathError::PathTooLong {
            len: segments.len(),
        });
    }
    Ok(())
}
