//! Abstract key-value store boundary
//!
//! The live registry transport is outside the core; all the core needs is a
//! read/write/exists surface over one registry-like path. [`RegFileStore`]
//! backs that surface with a .reg file on disk, which serves both as the
//! portable backend and as the test double for the Windows registry.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::error::StoreError;
use crate::reg;
use crate::value::ColorValue;

/// A registry-like backend holding flat string-keyed mappings
pub trait KeyValueStore {
    /// Read the full mapping under `path`.
    fn read_all(&self, path: &str) -> Result<IndexMap<String, ColorValue>, StoreError>;

    /// Replace the full mapping under `path`.
    fn write_all(
        &mut self,
        path: &str,
        mapping: &IndexMap<String, ColorValue>,
    ) -> Result<(), StoreError>;

    /// Whether `path` currently exists in the store.
    fn exists(&self, path: &str) -> bool;
}

/// A store backed by a single .reg file
///
/// The file holds the mapping for whichever key path the caller uses; its
/// bracketed section line records the path written last. Reads go through
/// the permissive codec, so the section line is skipped naturally.
#[derive(Debug, Clone)]
pub struct RegFileStore {
    file: PathBuf,
}

impl RegFileStore {
    pub fn new(file: PathBuf) -> Self {
        Self { file }
    }

    /// The backing file location.
    pub fn file(&self) -> &std::path::Path {
        &self.file
    }
}

impl KeyValueStore for RegFileStore {
    fn read_all(&self, path: &str) -> Result<IndexMap<String, ColorValue>, StoreError> {
        if !self.file.exists() {
            return Err(StoreError::NotFound(path.to_string()));
        }
        let contents = std::fs::read_to_string(&self.file).map_err(StoreError::Read)?;
        Ok(reg::parse(&contents)?)
    }

    fn write_all(
        &mut self,
        path: &str,
        mapping: &IndexMap<String, ColorValue>,
    ) -> Result<(), StoreError> {
        std::fs::write(&self.file, reg::render(path, mapping)).map_err(StoreError::Write)
    }

    fn exists(&self, _path: &str) -> bool {
        self.file.exists()
    }
}
