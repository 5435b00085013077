//! Registry backup before destructive writes
//!
//! Run before the first `write_all` so the user's original theme survives
//! an apply they regret.

use std::path::Path;

use tracing::info;

use crate::error::{BackupError, StoreError};
use crate::reg;
use crate::store::KeyValueStore;

/// Conventional backup filename, kept next to the store.
pub const BACKUP_FILE: &str = "registry_backup.reg";

/// Read the full mapping under `store_path` and write it to `dest` as .reg
/// text, overwriting any prior backup unconditionally.
///
/// Fails with [`BackupError::EmptyOrMissing`] before touching `dest` when
/// the store has nothing to save.
pub fn backup(
    store: &dyn KeyValueStore,
    store_path: &str,
    dest: &Path,
) -> Result<(), BackupError> {
    let mapping = match store.read_all(store_path) {
        Ok(mapping) => mapping,
        Err(StoreError::NotFound(_)) => return Err(BackupError::EmptyOrMissing),
        Err(e) => return Err(e.into()),
    };
    if mapping.is_empty() {
        return Err(BackupError::EmptyOrMissing);
    }

    std::fs::write(dest, reg::render(store_path, &mapping))?;
    info!("backed up {} values to {:?}", mapping.len(), dest);
    Ok(())
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::store::RegFileStore;
    use crate::value::ColorValue;

    #[test]
    fn missing_store_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegFileStore::new(dir.path().join("absent.reg"));
        let dest = dir.path().join(BACKUP_FILE);

        let err = backup(&store, reg::HIVE_PATH, &dest).unwrap_err();
        assert!(matches!(err, BackupError::EmptyOrMissing));
        assert!(!dest.exists());
    }

    #[test]
    fn empty_store_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = RegFileStore::new(dir.path().join("store.reg"));
        store.write_all(reg::HIVE_PATH, &IndexMap::new()).unwrap();
        let dest = dir.path().join(BACKUP_FILE);

        let err = backup(&store, reg::HIVE_PATH, &dest).unwrap_err();
        assert!(matches!(err, BackupError::EmptyOrMissing));
        assert!(!dest.exists());
    }

    #[test]
    fn backup_writes_parseable_reg_text() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = RegFileStore::new(dir.path().join("store.reg"));
        let mapping = IndexMap::from([
            ("Text Color".to_string(), ColorValue::Text("#cccccc".to_string())),
            ("Number Color".to_string(), ColorValue::Integer(0xffc600)),
        ]);
        store.write_all(reg::HIVE_PATH, &mapping).unwrap();

        let dest = dir.path().join(BACKUP_FILE);
        backup(&store, reg::HIVE_PATH, &dest).unwrap();

        let restored = reg::parse(&std::fs::read_to_string(&dest).unwrap()).unwrap();
        assert_eq!(restored, mapping);
    }

    #[test]
    fn backup_overwrites_prior_backup() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = RegFileStore::new(dir.path().join("store.reg"));
        let dest = dir.path().join(BACKUP_FILE);
        std::fs::write(&dest, "stale").unwrap();

        let mapping =
            IndexMap::from([("Text Color".to_string(), ColorValue::Text("#ffffff".to_string()))]);
        store.write_all(reg::HIVE_PATH, &mapping).unwrap();
        backup(&store, reg::HIVE_PATH, &dest).unwrap();

        let restored = reg::parse(&std::fs::read_to_string(&dest).unwrap()).unwrap();
        assert_eq!(restored, mapping);
    }
}
