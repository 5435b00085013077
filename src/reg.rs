//! The .reg text codec
//!
//! Bidirectional converter between Windows registry-export text and a flat
//! string-keyed mapping. Parsing is deliberately permissive about structure:
//! anything that is not a quoted `"key"=value` line (the version header,
//! bracketed section lines, blanks, comments) is skipped without complaint.
//! The two typed payloads, `dword:` and `hex:`, are strict - bad hexadecimal
//! is a hard error rather than a silently corrupted color.

use indexmap::IndexMap;

use crate::error::CodecError;
use crate::value::ColorValue;

/// Registry key Studio reads its custom syntax theme from.
pub const HIVE_PATH: &str =
    r"SOFTWARE\Roblox\RobloxStudio\Themes\Dark\ScriptEditorColors\SyntaxHighlighting\custom";

/// Fixed first line of every .reg export.
const HEADER: &str = "Windows Registry Editor Version 5.00";

const DWORD_PREFIX: &str = "dword:";
const HEX_PREFIX: &str = "hex:";

/// Parse .reg text into an insertion-ordered mapping.
///
/// A line is an entry iff, after trimming, it starts with `"` and contains
/// `=`; everything else is skipped. A repeated key keeps its first position
/// and takes the last value.
pub fn parse(text: &str) -> Result<IndexMap<String, ColorValue>, CodecError> {
    let mut mapping = IndexMap::new();

    for line in text.lines() {
        let line = line.trim();
        if !line.starts_with('"') {
            continue;
        }
        let Some((raw_key, raw_value)) = line.split_once('=') else {
            continue;
        };

        let key = unquote(raw_key);
        let value = parse_value(key, raw_value)?;
        mapping.insert(key.to_string(), value);
    }

    Ok(mapping)
}

fn parse_value(key: &str, raw: &str) -> Result<ColorValue, CodecError> {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return Ok(ColorValue::Text(raw[1..raw.len() - 1].to_string()));
    }

    if let Some(payload) = raw.strip_prefix(DWORD_PREFIX) {
        let n = u32::from_str_radix(payload, 16).map_err(|e| CodecError::MalformedValue {
            key: key.to_string(),
            reason: format!("bad dword payload {payload:?}: {e}"),
        })?;
        return Ok(ColorValue::Integer(n));
    }

    if let Some(payload) = raw.strip_prefix(HEX_PREFIX) {
        return Ok(ColorValue::Bytes(parse_hex_bytes(key, payload)?));
    }

    // Lenient fallback: value forms we do not recognize stay opaque.
    Ok(ColorValue::Text(raw.to_string()))
}

fn parse_hex_bytes(key: &str, payload: &str) -> Result<Vec<u8>, CodecError> {
    if payload.is_empty() {
        return Ok(Vec::new());
    }

    payload
        .split(',')
        .map(|chunk| {
            u8::from_str_radix(chunk.trim(), 16).map_err(|e| CodecError::MalformedValue {
                key: key.to_string(),
                reason: format!("bad hex byte {chunk:?}: {e}"),
            })
        })
        .collect()
}

/// Strip one layer of surrounding quotes.
fn unquote(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}

/// Render a full .reg file: the fixed header, a bracketed section naming
/// `key_path` under HKEY_CURRENT_USER, then one line per entry in mapping
/// iteration order. Every line ends with a single `\n`.
pub fn render(key_path: &str, mapping: &IndexMap<String, ColorValue>) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str("\n\n");
    out.push_str(&format!("[HKEY_CURRENT_USER\\{key_path}]\n"));

    for (key, value) in mapping {
        out.push_str(&format!("\"{key}\"={}\n", encode_value(value)));
    }

    out
}

fn encode_value(value: &ColorValue) -> String {
    match value {
        ColorValue::Text(s) => format!("\"{s}\""),
        ColorValue::Integer(n) => format!("{DWORD_PREFIX}{n:08x}"),
        ColorValue::Bytes(bytes) => {
            let joined =
                bytes.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(",");
            format!("{HEX_PREFIX}{joined}")
        }
    }
}
