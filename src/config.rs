//! Configuration for the phrase attribute cache
//!
//! Sensible defaults, overridable via environment variables. The owning
//! process decides the lifecycle (load-on-start, save-on-shutdown); this
//! module only decides where the cache file lives.

use std::env;
use std::path::PathBuf;
use tracing::info;

use crate::constants::{DEFAULT_CACHE_FILE, ENV_CACHE_PATH};

/// Cache persistence configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Path of the persisted cache file.
    pub cache_path: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_path: PathBuf::from(DEFAULT_CACHE_FILE),
        }
    }
}

impl CacheConfig {
    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var(ENV_CACHE_PATH) {
            let path = path.trim();
            if !path.is_empty() {
                config.cache_path = PathBuf::from(path);
            }
        }

        info!("Attribute cache file: {}", config.cache_path.display());
        config
    }
}
