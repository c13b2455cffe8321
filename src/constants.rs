//! Documented constants for the phrase attribute cache
//!
//! Centralizing these prevents magic strings and keeps the persistence
//! contract in one place.

// =============================================================================
// PERSISTENCE
// =============================================================================

/// Default cache file name, relative to the deployment root.
///
/// The pipeline runs with its working directory at the deployment root, so a
/// bare relative name keeps the cache next to the other runtime artifacts.
/// Callers that need a different location override it via config.
pub const DEFAULT_CACHE_FILE: &str = "attribute_cache.json";

/// Environment variable that overrides the cache file path.
pub const ENV_CACHE_PATH: &str = "PHRASE_MEMORY_CACHE_PATH";
