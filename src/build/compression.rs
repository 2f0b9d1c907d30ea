//! Compression modes and per-bundle resolution.
//!
//! Bundles default to the request's global compression mode; individual
//! bundles can be pinned to a different mode through an override table.
//! Resolution is a pure lookup with a fallback, never an error.

use std::collections::HashMap;

/// Compression mode applied to a built bundle.
///
/// The mode is configuration handed to the packaging engine; this layer
/// never compresses anything itself.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[derive(clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CompressionMode {
    /// No compression - fastest load, largest output
    None,
    /// Chunk-friendly LZ4 - balanced, the usual default
    #[default]
    Lz4,
    /// LZMA - smallest output, slowest to decompress
    Lzma,
}

impl std::fmt::Display for CompressionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompressionMode::None => write!(f, "none"),
            CompressionMode::Lz4 => write!(f, "lz4"),
            CompressionMode::Lzma => write!(f, "lzma"),
        }
    }
}

/// Per-bundle compression override table.
///
/// Keyed by bundle identifier. Populated before the build call and
/// read-only during it.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CompressionOverrides(HashMap<String, CompressionMode>);

impl CompressionOverrides {
    /// Creates an empty override table.
    pub fn new() -> Self {
        Default::default()
    }

    /// Pins `identifier` to `mode`, replacing any previous override.
    pub fn insert(&mut self, identifier: impl Into<String>, mode: CompressionMode) {
        self.0.insert(identifier.into(), mode);
    }

    /// Returns the override for `identifier`, if one exists.
    pub fn get(&self, identifier: &str) -> Option<CompressionMode> {
        self.0.get(identifier).copied()
    }

    /// Returns true when no overrides are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of overridden bundles.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, CompressionMode)> for CompressionOverrides {
    fn from_iter<I: IntoIterator<Item = (String, CompressionMode)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Compression policy: a global default plus per-bundle overrides.
#[derive(Clone, Debug, Default)]
pub struct CompressionPolicy {
    /// Mode used when no override matches.
    pub default: CompressionMode,
    /// Bundle identifier -> mode overrides.
    pub overrides: CompressionOverrides,
}

impl CompressionPolicy {
    /// Creates a policy with the given default and no overrides.
    pub fn new(default: CompressionMode) -> Self {
        Self {
            default,
            overrides: CompressionOverrides::new(),
        }
    }

    /// Resolves the compression mode for a bundle identifier.
    ///
    /// Returns the overridden mode when `identifier` is present in the
    /// table, the global default otherwise. Absence of a key is the
    /// normal fallback path, not a failure.
    pub fn resolve(&self, identifier: &str) -> CompressionMode {
        self.overrides.get(identifier).unwrap_or(self.default)
    }
}
