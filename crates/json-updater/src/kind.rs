//! Shape tags for JSON values.
//!
//! Merge decisions are taken once per value from these tags instead of
//! probing the value ad hoc.

use std::fmt;

use serde_json::Value;

/// The runtime kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Mapping,
    Sequence,
    String,
    Number,
    Boolean,
    Null,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => ValueKind::Mapping,
            Value::Array(_) => ValueKind::Sequence,
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
        }
    }

    pub fn structural(self) -> StructuralType {
        match self {
            ValueKind::Mapping => StructuralType::Mapping,
            ValueKind::Sequence => StructuralType::Sequence,
            ValueKind::String | ValueKind::Number | ValueKind::Boolean | ValueKind::Null => {
                StructuralType::Scalar
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Mapping => "object",
            ValueKind::Sequence => "array",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse category used for type-compatibility checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralType {
    Mapping,
    Sequence,
    Scalar,
}

impl StructuralType {
    pub fn of(value: &Value) -> Self {
        ValueKind::of(value).structural()
    }
}
