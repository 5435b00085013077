//! Huepack - an editor core for Roblox Studio script-editor color themes
//!
//! Huepack owns the theme configuration model and its dual-format codec:
//! themes persist as JSON documents or Windows registry-export (`.reg`)
//! text, and push/pull through an abstract key-value store standing in for
//! the live registry.

pub mod backup;
pub mod config;
pub mod error;
pub mod reg;
pub mod schema;
pub mod store;
pub mod value;

pub use config::{LoadOutcome, ThemeConfig};
pub use value::ColorValue;
