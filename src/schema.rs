//! The fixed schema of themeable script-editor elements
//!
//! One entry per registry value under the Studio syntax-highlighting key,
//! in the order the editor presents them. Defined once at process start and
//! never mutated; key uniqueness is an invariant.

use std::collections::HashMap;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::error::SchemaError;
use crate::value::ColorValue;

/// A single recognized theme key
#[derive(Debug, Clone, Copy)]
pub struct SchemaEntry {
    /// Registry value name
    pub key: &'static str,
    /// Human-readable element name shown in pickers
    pub display_name: &'static str,
    /// Color used when an imported theme omits this key
    pub default: &'static str,
}

// Studio dark-theme defaults.
const ENTRIES: &[SchemaEntry] = &[
    entry("Background Color", "Background", "#252525"),
    entry("Bracket Color", "Brackets", "#cccccc"),
    entry("Built-in Function Color", "Built-in Functions", "#84d6f7"),
    entry("Comment Color", "Comments", "#666462"),
    entry("Error Color", "Errors", "#ff4444"),
    entry("Find Selection Background Color", "Find Selection Background", "#555500"),
    entry("Function Name Color", "Function Names", "#fdfbac"),
    entry("Keyword Color", "Keywords", "#f86d7c"),
    entry("Luau Keyword Color", "Luau Keywords", "#f86d7c"),
    entry("Matching Word Background Color", "Matching Word Background", "#555555"),
    entry("Method Color", "Methods", "#fdfbac"),
    entry("Number Color", "Numbers", "#ffc600"),
    entry("Operator Color", "Operators", "#cccccc"),
    entry("Property Color", "Properties", "#61a3f2"),
    entry("Selection Background Color", "Selection Background", "#233e66"),
    entry("Selection Color", "Selection", "#999999"),
    entry("Self Color", "Self", "#f86d7c"),
    entry("String Color", "Strings", "#adf195"),
    entry("Text Color", "Text", "#cccccc"),
    entry("Todo Color", "TODOs", "#66a8f9"),
    entry("Warning Color", "Warnings", "#ff8e3c"),
    entry("Whitespace Color", "Whitespace", "#333333"),
];

const fn entry(
    key: &'static str,
    display_name: &'static str,
    default: &'static str,
) -> SchemaEntry {
    SchemaEntry { key, display_name, default }
}

/// Key-indexed view of the schema (built once)
static INDEX: Lazy<HashMap<&'static str, &'static SchemaEntry>> =
    Lazy::new(|| ENTRIES.iter().map(|e| (e.key, e)).collect());

/// All schema keys in presentation order.
pub fn all_keys() -> impl DoubleEndedIterator<Item = &'static str> {
    ENTRIES.iter().map(|e| e.key)
}

/// Whether `key` is part of the schema.
pub fn contains(key: &str) -> bool {
    INDEX.contains_key(key)
}

/// The default color for `key`.
pub fn default_value(key: &str) -> Result<ColorValue, SchemaError> {
    lookup(key).map(|e| ColorValue::Text(e.default.to_string()))
}

/// The human-readable name for `key`.
pub fn display_name(key: &str) -> Result<&'static str, SchemaError> {
    lookup(key).map(|e| e.display_name)
}

/// The full default mapping, in schema order.
pub fn defaults() -> IndexMap<String, ColorValue> {
    ENTRIES
        .iter()
        .map(|e| (e.key.to_string(), ColorValue::Text(e.default.to_string())))
        .collect()
}

/// All entries in presentation order (key, display name, default).
pub fn entries() -> &'static [SchemaEntry] {
    ENTRIES
}

fn lookup(key: &str) -> Result<&'static SchemaEntry, SchemaError> {
    INDEX.get(key).copied().ok_or_else(|| SchemaError::UnknownKey(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        assert_eq!(INDEX.len(), ENTRIES.len());
    }

    #[test]
    fn defaults_cover_every_key() {
        let defaults = defaults();
        assert_eq!(defaults.len(), ENTRIES.len());
        for key in all_keys() {
            assert!(defaults.contains_key(key), "no default for {key}");
        }
    }

    #[test]
    fn defaults_iterate_in_schema_order() {
        let defaults = defaults();
        let ordered: Vec<&str> = defaults.keys().map(String::as_str).collect();
        assert_eq!(ordered, all_keys().collect::<Vec<_>>());
    }

    #[test]
    fn lookup_known_key() {
        assert_eq!(display_name("Keyword Color").unwrap(), "Keywords");
        assert_eq!(
            default_value("Background Color").unwrap(),
            ColorValue::Text("#252525".to_string())
        );
    }

    #[test]
    fn lookup_unknown_key_fails() {
        let err = display_name("Foo").unwrap_err();
        assert_eq!(err, SchemaError::UnknownKey("Foo".to_string()));
    }
}
