//! Document text codec: JSON text in, pretty JSON text out.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::options::UpdaterOptions;

/// Parse stored text into a document.
pub fn parse_document(location: &Path, text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|source| Error::Parse {
        location: location.to_path_buf(),
        source,
    })
}

/// Serialize a document with `options.indent` spaces per level.
///
/// Key order follows the document's own iteration order.
pub fn serialize_document(doc: &Value, options: &UpdaterOptions) -> Result<String> {
    let indent = vec![b' '; options.indent];
    let mut buf = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    doc.serialize(&mut ser).map_err(Error::Serialize)?;
    if options.trailing_newline {
        buf.push(b'\n');
    }
    // serde_json only emits UTF-8
    Ok(String::from_utf8(buf).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}
