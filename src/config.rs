//! The in-memory theme configuration
//!
//! [`ThemeConfig`] is the single authoritative copy of the theme while it is
//! being edited. Its key set is always exactly the schema's key set: imported
//! data missing a key is backfilled with the schema default, and imported
//! data carrying an extra key is rejected wholesale. There is no ambient
//! global; callers own their instance and pass it explicitly.

use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{LoadError, SchemaError};
use crate::reg;
use crate::schema;
use crate::value::ColorValue;

/// A complete mapping from schema keys to color values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    colors: IndexMap<String, ColorValue>,
}

/// A successfully loaded configuration plus its non-fatal warnings
#[derive(Debug)]
pub struct LoadOutcome {
    pub config: ThemeConfig,
    /// Schema keys absent from the imported data, filled from defaults.
    /// The caller decides how to surface this.
    pub backfilled: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeConfig {
    /// Fresh configuration with every schema key at its default color.
    pub fn new() -> Self {
        Self { colors: schema::defaults() }
    }

    /// Validate a typed mapping against the schema and build a configuration
    /// from it.
    ///
    /// Extra keys reject the whole load; missing keys are backfilled from
    /// defaults and reported in the outcome. Individual color values are
    /// trusted as-is: the consuming application never format-checks them.
    pub fn load(raw: IndexMap<String, ColorValue>) -> Result<LoadOutcome, LoadError> {
        let extra = extra_keys(raw.keys().map(String::as_str));
        if !extra.is_empty() {
            return Err(LoadError::UnknownKeys(extra));
        }

        let backfilled: Vec<String> =
            schema::all_keys().filter(|k| !raw.contains_key(*k)).map(str::to_string).collect();

        // Overlay onto defaults; existing keys keep their schema position.
        let mut config = Self::new();
        for (key, value) in raw {
            config.colors.insert(key, value);
        }

        Ok(LoadOutcome { config, backfilled })
    }

    /// Load from a parsed JSON document.
    ///
    /// Fails with [`LoadError::NotAMapping`] when the document root is not
    /// an object.
    pub fn load_json(raw: &Value) -> Result<LoadOutcome, LoadError> {
        let object = raw.as_object().ok_or(LoadError::NotAMapping)?;

        let extra = extra_keys(object.keys().map(String::as_str));
        if !extra.is_empty() {
            return Err(LoadError::UnknownKeys(extra));
        }

        let mut mapping = IndexMap::with_capacity(object.len());
        for (key, value) in object {
            mapping.insert(key.clone(), ColorValue::from_json(key, value)?);
        }
        Self::load(mapping)
    }

    /// Overwrite one color in place.
    pub fn set_color(&mut self, key: &str, value: ColorValue) -> Result<(), SchemaError> {
        if !schema::contains(key) {
            return Err(SchemaError::UnknownKey(key.to_string()));
        }
        self.colors.insert(key.to_string(), value);
        Ok(())
    }

    /// The color currently assigned to `key`.
    pub fn color(&self, key: &str) -> Result<&ColorValue, SchemaError> {
        self.colors.get(key).ok_or_else(|| SchemaError::UnknownKey(key.to_string()))
    }

    /// The full mapping, in schema order.
    pub fn colors(&self) -> &IndexMap<String, ColorValue> {
        &self.colors
    }

    /// JSON projection, keys in schema order.
    pub fn to_json(&self) -> Value {
        Value::Object(self.colors.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
    }

    /// .reg projection targeting the Studio theme key.
    pub fn to_reg_text(&self) -> String {
        reg::render(reg::HIVE_PATH, &self.colors)
    }

    /// Load a theme file, dispatching on extension (`.json` or `.reg`).
    pub fn load_path(path: &Path) -> Result<LoadOutcome> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme from {path:?}"))?;

        let outcome = match ThemeFormat::from_path(path)? {
            ThemeFormat::Json => {
                let raw: Value = serde_json::from_str(&contents)
                    .with_context(|| format!("Failed to parse JSON theme {path:?}"))?;
                Self::load_json(&raw)?
            }
            ThemeFormat::Reg => Self::load(reg::parse(&contents)?)?,
        };

        Ok(outcome)
    }

    /// Save the theme to a file, dispatching on extension (`.json` or `.reg`).
    ///
    /// Whole-file overwrite, not atomic rename; a crash mid-write can leave
    /// a truncated file.
    pub fn save_path(&self, path: &Path) -> Result<()> {
        let contents = match ThemeFormat::from_path(path)? {
            ThemeFormat::Json => serde_json::to_string_pretty(&self.colors)
                .with_context(|| "Failed to serialize theme")?,
            ThemeFormat::Reg => self.to_reg_text(),
        };

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write theme to {path:?}"))?;

        Ok(())
    }
}

/// On-disk theme formats, selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ThemeFormat {
    Json,
    Reg,
}

impl ThemeFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("reg") => Ok(Self::Reg),
            _ => anyhow::bail!("unsupported theme file extension for {path:?} (expected .json or .reg)"),
        }
    }
}

fn extra_keys<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<String> {
    keys.filter(|k| !schema::contains(k)).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn new_matches_loading_schema_defaults() {
        let outcome = ThemeConfig::load(schema::defaults()).unwrap();
        assert!(outcome.backfilled.is_empty());
        assert_eq!(outcome.config, ThemeConfig::new());
    }

    #[test]
    fn load_rejects_extra_keys_wholesale() {
        let mut raw = schema::defaults();
        raw.insert("Foo".to_string(), ColorValue::Text("#000000".to_string()));

        let err = ThemeConfig::load(raw).unwrap_err();
        assert_eq!(err, LoadError::UnknownKeys(vec!["Foo".to_string()]));
    }

    #[test]
    fn load_backfills_missing_keys_and_reports_them() {
        let mut raw = schema::defaults();
        raw.shift_remove("Comment Color");
        raw.insert("Text Color".to_string(), ColorValue::Text("#ffffff".to_string()));

        let outcome = ThemeConfig::load(raw).unwrap();
        assert_eq!(outcome.backfilled, vec!["Comment Color".to_string()]);
        assert_eq!(
            outcome.config.color("Comment Color").unwrap(),
            &schema::default_value("Comment Color").unwrap()
        );
        assert_eq!(
            outcome.config.color("Text Color").unwrap(),
            &ColorValue::Text("#ffffff".to_string())
        );
    }

    #[test]
    fn loaded_config_keeps_schema_key_order() {
        // Feed keys in reverse order; the result must still iterate in
        // schema order because values overlay onto defaults.
        let mut raw = IndexMap::new();
        for key in schema::all_keys().rev() {
            raw.insert(key.to_string(), ColorValue::Text("#010203".to_string()));
        }

        let outcome = ThemeConfig::load(raw).unwrap();
        let keys: Vec<&str> = outcome.config.colors().keys().map(String::as_str).collect();
        assert_eq!(keys, schema::all_keys().collect::<Vec<_>>());
    }

    #[test]
    fn load_json_rejects_non_object_root() {
        for raw in [json!([1, 2, 3]), json!("theme"), json!(7)] {
            let err = ThemeConfig::load_json(&raw).unwrap_err();
            assert_eq!(err, LoadError::NotAMapping);
        }
    }

    #[test]
    fn load_json_reports_unknown_keys_before_value_errors() {
        let raw = json!({ "Foo": null });
        let err = ThemeConfig::load_json(&raw).unwrap_err();
        assert_eq!(err, LoadError::UnknownKeys(vec!["Foo".to_string()]));
    }

    #[test]
    fn set_color_rejects_unknown_key() {
        let mut config = ThemeConfig::new();
        let err = config.set_color("Foo", ColorValue::Integer(0)).unwrap_err();
        assert_eq!(err, SchemaError::UnknownKey("Foo".to_string()));
    }

    #[test]
    fn set_color_overwrites_in_place() {
        let mut config = ThemeConfig::new();
        config.set_color("Keyword Color", ColorValue::Integer(0x00ff00)).unwrap();
        assert_eq!(config.color("Keyword Color").unwrap(), &ColorValue::Integer(0x00ff00));
    }

    #[test]
    fn json_projection_round_trips() {
        let mut config = ThemeConfig::new();
        config.set_color("Number Color", ColorValue::Integer(255)).unwrap();

        let outcome = ThemeConfig::load_json(&config.to_json()).unwrap();
        assert!(outcome.backfilled.is_empty());
        assert_eq!(outcome.config, config);
    }

    #[test]
    fn reg_projection_round_trips() {
        let config = ThemeConfig::new();
        let outcome = ThemeConfig::load(reg::parse(&config.to_reg_text()).unwrap()).unwrap();
        assert!(outcome.backfilled.is_empty());
        assert_eq!(outcome.config, config);
    }

    #[test]
    fn save_and_load_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ThemeConfig::new();
        config.set_color("String Color", ColorValue::Text("#00ff88".to_string())).unwrap();

        for name in ["theme.json", "theme.reg"] {
            let path = dir.path().join(name);
            config.save_path(&path).unwrap();
            let outcome = ThemeConfig::load_path(&path).unwrap();
            assert!(outcome.backfilled.is_empty());
            assert_eq!(outcome.config, config, "round trip through {name}");
        }
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let config = ThemeConfig::new();
        let err = config.save_path(Path::new("theme.txt")).unwrap_err();
        assert!(err.to_string().contains("unsupported theme file extension"));
    }
}
