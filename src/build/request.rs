//! Build request construction.
//!
//! A [`BuildRequest`] captures everything one build invocation needs:
//! where the bundles go, which platform they target, whether cached
//! results may be reused, and the compression policy. Requests are
//! immutable once constructed and built via [`BuildRequestBuilder`].

use super::{CompressionMode, CompressionOverrides, CompressionPolicy, Error, Result};
use std::path::{Path, PathBuf};

/// Default cache-server port used when only a host is configured.
pub const DEFAULT_CACHE_PORT: u16 = 8126;

/// Target platform for built bundles.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[derive(clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    /// 64-bit Windows standalone player
    Windows64,
    /// macOS standalone player
    MacOs,
    /// 64-bit Linux standalone player
    Linux64,
    /// Android devices
    Android,
    /// iOS devices
    Ios,
    /// Browser WebGL runtime
    WebGl,
}

impl Platform {
    /// Returns the build group this platform belongs to by default.
    pub fn default_group(self) -> BuildGroup {
        match self {
            Platform::Windows64 | Platform::MacOs | Platform::Linux64 => BuildGroup::Standalone,
            Platform::Android => BuildGroup::Android,
            Platform::Ios => BuildGroup::Ios,
            Platform::WebGl => BuildGroup::WebGl,
        }
    }
}

/// Build group a target platform belongs to.
///
/// Groups partition platforms the way the packaging engine expects
/// (desktop standalones share one group, mobile targets get their own).
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[derive(clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BuildGroup {
    /// Desktop standalone players
    Standalone,
    /// Android devices
    Android,
    /// iOS devices
    Ios,
    /// Browser WebGL runtime
    WebGl,
}

/// Cache-server endpoint used by the packaging engine to share build
/// artifacts between machines.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CacheServer {
    /// Cache server hostname
    pub host: String,
    /// Cache server port
    #[serde(default = "default_cache_port")]
    pub port: u16,
}

fn default_cache_port() -> u16 {
    DEFAULT_CACHE_PORT
}

impl CacheServer {
    /// Creates a cache-server endpoint with the default port.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_CACHE_PORT,
        }
    }
}

/// Immutable description of one build invocation.
///
/// Created per invocation via [`BuildRequestBuilder`] and discarded
/// after the build call returns.
#[derive(Clone, Debug)]
pub struct BuildRequest {
    /// Directory built bundles are written to.
    output_path: PathBuf,

    /// Target platform.
    platform: Platform,

    /// Build group; derived from the platform unless set explicitly.
    build_group: BuildGroup,

    /// Rebuild everything even when the engine has cached results.
    force_rebuild: bool,

    /// Split bundle data into independently decompressible chunks.
    chunked_compression: bool,

    /// Global compression mode plus per-bundle overrides.
    policy: CompressionPolicy,

    /// Optional cache-server endpoint.
    cache: Option<CacheServer>,
}

impl BuildRequest {
    /// Returns the output directory.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the target platform.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns the build group.
    pub fn build_group(&self) -> BuildGroup {
        self.build_group
    }

    /// Returns whether cached engine results must be discarded.
    pub fn force_rebuild(&self) -> bool {
        self.force_rebuild
    }

    /// Returns whether chunk-based compression is requested.
    pub fn chunked_compression(&self) -> bool {
        self.chunked_compression
    }

    /// Returns the global compression mode.
    pub fn compression(&self) -> CompressionMode {
        self.policy.default
    }

    /// Returns the compression policy (global mode plus overrides).
    pub fn compression_policy(&self) -> &CompressionPolicy {
        &self.policy
    }

    /// Resolves the compression mode for a bundle identifier.
    ///
    /// Convenience forwarding to [`CompressionPolicy::resolve`].
    pub fn resolve_compression(&self, identifier: &str) -> CompressionMode {
        self.policy.resolve(identifier)
    }

    /// Returns the cache-server endpoint, if configured.
    pub fn cache(&self) -> Option<&CacheServer> {
        self.cache.as_ref()
    }
}

/// Builder for constructing [`BuildRequest`].
///
/// # Examples
///
/// ```no_run
/// use bundlebuild::build::{BuildRequestBuilder, CompressionMode, Platform};
///
/// # fn example() -> bundlebuild::build::Result<()> {
/// let request = BuildRequestBuilder::new()
///     .output_path("Build/Bundles")
///     .platform(Platform::Linux64)
///     .compression(CompressionMode::Lzma)
///     .override_compression("Bundle1", CompressionMode::None)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct BuildRequestBuilder {
    output_path: Option<PathBuf>,
    platform: Option<Platform>,
    build_group: Option<BuildGroup>,
    force_rebuild: bool,
    chunked_compression: bool,
    compression: CompressionMode,
    overrides: CompressionOverrides,
    cache: Option<CacheServer>,
}

impl BuildRequestBuilder {
    /// Creates a new request builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the output directory.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn output_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the target platform.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Sets the build group explicitly.
    ///
    /// Default: derived from the platform via [`Platform::default_group`].
    pub fn build_group(mut self, group: BuildGroup) -> Self {
        self.build_group = Some(group);
        self
    }

    /// Requests a full rebuild, discarding cached engine results.
    ///
    /// Default: false
    pub fn force_rebuild(mut self, force: bool) -> Self {
        self.force_rebuild = force;
        self
    }

    /// Requests chunk-based compression.
    ///
    /// Default: false
    pub fn chunked_compression(mut self, chunked: bool) -> Self {
        self.chunked_compression = chunked;
        self
    }

    /// Sets the global compression mode.
    ///
    /// Default: [`CompressionMode::Lz4`]
    pub fn compression(mut self, mode: CompressionMode) -> Self {
        self.compression = mode;
        self
    }

    /// Pins a single bundle to a compression mode.
    pub fn override_compression(
        mut self,
        identifier: impl Into<String>,
        mode: CompressionMode,
    ) -> Self {
        self.overrides.insert(identifier, mode);
        self
    }

    /// Replaces the whole override table.
    ///
    /// Default: empty
    pub fn overrides(mut self, overrides: CompressionOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Sets the cache-server endpoint.
    ///
    /// Default: None (engine-local cache only)
    pub fn cache(mut self, cache: CacheServer) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Builds the request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteRequest`] if `output_path` or
    /// `platform` was not provided.
    pub fn build(self) -> Result<BuildRequest> {
        let output_path = self.output_path.ok_or(Error::IncompleteRequest {
            field: "output_path",
        })?;
        let platform = self.platform.ok_or(Error::IncompleteRequest {
            field: "platform",
        })?;

        Ok(BuildRequest {
            output_path,
            platform,
            build_group: self.build_group.unwrap_or_else(|| platform.default_group()),
            force_rebuild: self.force_rebuild,
            chunked_compression: self.chunked_compression,
            policy: CompressionPolicy {
                default: self.compression,
                overrides: self.overrides,
            },
            cache: self.cache,
        })
    }
}
