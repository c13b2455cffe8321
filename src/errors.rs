//! Error types for cache persistence
//!
//! Lookup misses are not errors and are signaled via `Option` at the call
//! site. Only persistence can fail, and always as a recoverable signal the
//! caller can inspect; nothing in this crate panics on malformed data.

use thiserror::Error;

/// Failure modes of `save`/`load` on the attribute cache.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The cache file could not be read or written.
    #[error("cache file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The cache file exists but is not the expected two-field JSON record.
    #[error("cache file is not valid cache JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// What a `load` call actually did.
///
/// A missing file is an expected condition (first run, cold deploy), so it is
/// reported as a successful no-op rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was parsed and merged into the live tables.
    Loaded,
    /// No file at the given path; tables were left untouched.
    NotFound,
}
