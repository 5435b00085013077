//! Color values carried by a theme
//!
//! Values are opaque to the codec except for their encoding tag. The
//! consuming application never range-checks or format-checks individual
//! colors (any string or integer is accepted), and neither do we.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CodecError;

/// A single themeable color in one of the three encodings the registry
/// importer understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// A `"#RRGGBB"`-style or raw color string
    Text(String),
    /// A 32-bit encoded color (`dword:` in .reg text)
    Integer(u32),
    /// A raw binary blob (`hex:` in .reg text), rare
    Bytes(Vec<u8>),
}

impl ColorValue {
    /// Ingest an arbitrary JSON value as a color.
    ///
    /// Strings, unsigned 32-bit numbers, and byte arrays map onto the three
    /// encodings; anything else has no .reg representation and is rejected.
    pub fn from_json(key: &str, value: &Value) -> Result<Self, CodecError> {
        match value {
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Number(n) => n
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .map(Self::Integer)
                .ok_or_else(|| CodecError::UnsupportedValue {
                    key: key.to_string(),
                    found: format!("number {n} does not fit a 32-bit color"),
                }),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
                .collect::<Option<Vec<u8>>>()
                .map(Self::Bytes)
                .ok_or_else(|| CodecError::UnsupportedValue {
                    key: key.to_string(),
                    found: "array with non-byte elements".to_string(),
                }),
            other => Err(CodecError::UnsupportedValue {
                key: key.to_string(),
                found: kind_name(other).to_string(),
            }),
        }
    }

    /// Project back into a JSON value.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(s) => Value::String(s.clone()),
            Self::Integer(n) => Value::Number((*n).into()),
            Self::Bytes(bytes) => {
                Value::Array(bytes.iter().map(|&b| Value::Number(b.into())).collect())
            }
        }
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
