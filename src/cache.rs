//! Phrase Attribute Cache
//!
//! Memoizes expensive LLM-derived facts about a phrase, keyed by its
//! normalized text (see `normalize`):
//! - the RGB color inferred for the phrase
//! - the simplified token form of the phrase
//!
//! The two memo tables are independent on purpose: the two LLM computations
//! they stand in for are independently expensive and independently invoked,
//! so a phrase can have a color cached but no simplified form, or vice versa.
//!
//! The cache is a plain owned object with no interior locking. Concurrent
//! callers must serialize access externally; the design assumes one logical
//! owner at a time. `save`/`load` do blocking file I/O — offload to a worker
//! if that matters to you.
//!
//! Persisted file schema (UTF-8 JSON, either field may be absent):
//! ```json
//! { "rgb": { "<key>": [r, g, b] }, "simplified": { "<key>": ["tok", ...] } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

use crate::errors::{CacheError, LoadOutcome};
use crate::normalize::normalize;

/// Opaque RGB-like value produced by the color pipeline.
///
/// Three `u8` components, caller-defined semantics. Serializes as a JSON
/// array `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Point-in-time, independent copy of both memo tables.
///
/// Mutating a snapshot never affects live cache state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSnapshot {
    pub rgb: HashMap<String, Rgb>,
    pub simplified: HashMap<String, Vec<String>>,
}

/// Entry counts for reporting.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CacheStats {
    pub rgb_entries: usize,
    pub simplified_entries: usize,
}

/// On-disk record. Field absence is tolerated and treated as empty.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedCache {
    #[serde(default)]
    rgb: HashMap<String, Rgb>,
    #[serde(default)]
    simplified: HashMap<String, Vec<String>>,
}

/// Two memo tables keyed by normalized phrase text, with no eviction.
///
/// Entries are created through `store_*`, overwritten on key collision
/// (last write wins), and never invalidated by time or size.
#[derive(Debug, Clone, Default)]
pub struct AttributeCache {
    rgb: HashMap<String, Rgb>,
    simplified: HashMap<String, Vec<String>>,
}

impl AttributeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the cached RGB value for a phrase. No side effects.
    pub fn get_rgb(&self, phrase: &str) -> Option<Rgb> {
        self.rgb.get(&normalize(phrase)).copied()
    }

    /// Insert or overwrite the RGB value for a phrase.
    pub fn store_rgb(&mut self, phrase: &str, rgb: Rgb) {
        self.rgb.insert(normalize(phrase), rgb);
    }

    /// Look up the cached simplified token form for a phrase. No side effects.
    pub fn get_simplified(&self, phrase: &str) -> Option<&[String]> {
        self.simplified.get(&normalize(phrase)).map(Vec::as_slice)
    }

    /// Insert or overwrite the simplified token form for a phrase.
    pub fn store_simplified(&mut self, phrase: &str, tokens: Vec<String>) {
        self.simplified.insert(normalize(phrase), tokens);
    }

    /// Empty both memo tables. Irreversible.
    pub fn clear(&mut self) {
        self.rgb.clear();
        self.simplified.clear();
    }

    /// Total number of entries across both tables.
    pub fn len(&self) -> usize {
        self.rgb.len() + self.simplified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rgb.is_empty() && self.simplified.is_empty()
    }

    /// Entry counts per table, for reporting.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            rgb_entries: self.rgb.len(),
            simplified_entries: self.simplified.len(),
        }
    }

    /// Independent copy of both tables.
    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot {
            rgb: self.rgb.clone(),
            simplified: self.simplified.clone(),
        }
    }

    /// Serialize both tables to `path`, overwriting any existing file.
    ///
    /// On failure the error is returned and in-memory state is untouched;
    /// this never takes the process down.
    pub fn save(&self, path: &Path) -> Result<(), CacheError> {
        let record = PersistedCache {
            rgb: self.rgb.clone(),
            simplified: self.simplified.clone(),
        };
        let json = serde_json::to_string_pretty(&record)?;
        if let Err(e) = fs::write(path, json) {
            warn!("Failed to write attribute cache to {}: {}", path.display(), e);
            return Err(CacheError::Io(e));
        }
        debug!(
            "Saved attribute cache to {} ({} rgb, {} simplified)",
            path.display(),
            record.rgb.len(),
            record.simplified.len()
        );
        Ok(())
    }

    /// Merge the persisted file at `path` into the live tables.
    ///
    /// A missing file is a no-op (`LoadOutcome::NotFound`), not an error.
    /// File entries overwrite in-memory entries for the same key; keys only
    /// present in memory survive. The file is parsed in full before anything
    /// is merged, so a malformed file never leaves the tables half-updated.
    pub fn load(&mut self, path: &Path) -> Result<LoadOutcome, CacheError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No attribute cache at {}, starting cold", path.display());
                return Ok(LoadOutcome::NotFound);
            }
            Err(e) => {
                warn!("Failed to read attribute cache {}: {}", path.display(), e);
                return Err(CacheError::Io(e));
            }
        };

        let record: PersistedCache = match serde_json::from_str(&json) {
            Ok(record) => record,
            Err(e) => {
                warn!("Malformed attribute cache {}: {}", path.display(), e);
                return Err(CacheError::Parse(e));
            }
        };

        debug!(
            "Loaded attribute cache from {} ({} rgb, {} simplified)",
            path.display(),
            record.rgb.len(),
            record.simplified.len()
        );
        self.rgb.extend(record.rgb);
        self.simplified.extend(record.simplified);
        Ok(LoadOutcome::Loaded)
    }
}
