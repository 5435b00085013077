//! Error types for the theme core
//!
//! Schema violations abort a load outright and leave the prior configuration
//! untouched; missing keys are never errors (they backfill from defaults and
//! surface as a warning in the load outcome). The core never retries and
//! never exits the process itself.

use thiserror::Error;

/// Errors from single-key schema lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The key is outside the fixed schema
    #[error("unknown schema key {0:?}")]
    UnknownKey(String),
}

/// Errors from the .reg codec and value ingestion
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A `dword:` or `hex:` payload that is not valid hexadecimal
    #[error("malformed value for {key:?}: {reason}")]
    MalformedValue { key: String, reason: String },

    /// A raw value that matches none of the three encodings
    #[error("unsupported value kind for {key:?}: {found}")]
    UnsupportedValue { key: String, found: String },
}

/// Errors from loading an untyped mapping into a [`ThemeConfig`]
///
/// [`ThemeConfig`]: crate::config::ThemeConfig
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The document root is not a key/value mapping
    #[error("theme data is not a key/value mapping")]
    NotAMapping,

    /// Keys outside the schema were found; the whole load is rejected
    #[error("unrecognized keys in theme data: {}", .0.join(", "))]
    UnknownKeys(Vec<String>),

    /// A value could not be ingested as any color encoding
    #[error(transparent)]
    Value(#[from] CodecError),
}

/// Errors from the abstract key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store path does not exist
    #[error("store path not found: {0}")]
    NotFound(String),

    /// Failed to read the backing storage
    #[error("failed to read store")]
    Read(#[source] std::io::Error),

    /// Failed to write the backing storage
    #[error("failed to write store")]
    Write(#[source] std::io::Error),

    /// Stored data could not be decoded
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Errors from the backup flow
#[derive(Debug, Error)]
pub enum BackupError {
    /// The store had nothing to save; no backup file was written
    #[error("store has no data to back up")]
    EmptyOrMissing,

    /// Reading the store failed for a reason other than absence
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Writing the backup file failed
    #[error("failed to write backup file")]
    Io(#[from] std::io::Error),
}
