//! Optional TOML configuration file.
//!
//! A config file supplies defaults for the compression policy, the
//! per-bundle override table, the cache server, and the engine command.
//! Command-line flags always take precedence over config values.
//!
//! # Format
//!
//! ```toml
//! [build]
//! compression = "lz4"
//! chunked = true
//!
//! [build.per_bundle_compression]
//! Bundle1 = "none"
//! Bundle2 = "lzma"
//!
//! [cache]
//! host = "buildcache.example.com"
//! port = 8126
//!
//! [engine]
//! command = "bundle-engine"
//! args = ["--quiet"]
//! ```

use crate::build::{CacheServer, CompressionMode, CompressionOverrides};
use crate::error::Result;
use anyhow::Context;
use std::path::Path;

/// Default config file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "bundlebuild.toml";

/// Parsed configuration file.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct BuildConfig {
    /// Build defaults
    #[serde(default)]
    pub build: BuildSection,

    /// Cache-server endpoint
    #[serde(default)]
    pub cache: Option<CacheServer>,

    /// Engine command configuration
    #[serde(default)]
    pub engine: EngineSection,
}

/// `[build]` section: compression defaults.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct BuildSection {
    /// Global compression mode
    #[serde(default)]
    pub compression: Option<CompressionMode>,

    /// Chunk-based compression flag
    #[serde(default)]
    pub chunked: Option<bool>,

    /// Per-bundle compression overrides
    #[serde(default)]
    pub per_bundle_compression: CompressionOverrides,
}

/// `[engine]` section: how to reach the packaging engine.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct EngineSection {
    /// Engine command name or path
    #[serde(default)]
    pub command: Option<String>,

    /// Extra arguments passed before the job subcommand
    #[serde(default)]
    pub args: Vec<String>,
}

impl BuildConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = toml::from_str(&raw)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads the config file if one is present.
    ///
    /// An explicit path must exist; the default file name is optional
    /// and silently skipped when absent.
    pub fn load_optional(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
