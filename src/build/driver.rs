//! Build driving and result translation.
//!
//! The driver wires a [`BuildRequest`] and enumerated bundles into a
//! single engine call: it ensures the output directory exists, resolves
//! per-bundle compression, invokes [`PackagingEngine::pack`], and maps
//! the engine's return code into a [`BuildResult`].

use super::checksum::calculate_sha256;
use super::engine::{PackEntry, PackJob, PackParams, PackagingEngine, ReturnCode};
use super::{BuildRequest, BundleDescriptor, Result};
use std::path::PathBuf;

/// Metadata for one produced bundle file.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct BuiltArtifact {
    /// Path of the produced file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// Hex-encoded SHA-256 checksum
    pub checksum: String,
}

/// Terminal outcome of one build call. Created once, never mutated.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct BuildResult {
    /// Whether the engine reported a usable build
    pub success: bool,
    /// Engine diagnostic code, passed through verbatim
    pub code: ReturnCode,
    /// Produced bundle files with size and checksum; empty on failure
    pub artifacts: Vec<BuiltArtifact>,
}

impl BuildResult {
    fn failed(code: ReturnCode) -> Self {
        Self {
            success: false,
            code,
            artifacts: Vec::new(),
        }
    }
}

/// Build driver over an external packaging engine.
///
/// One build call runs to completion before returning; concurrent
/// builds against the same output path are not supported.
///
/// # Examples
///
/// ```no_run
/// use bundlebuild::build::{
///     BuildDriver, BuildRequestBuilder, Platform, engine::ProcessEngine,
/// };
///
/// # async fn example() -> bundlebuild::build::Result<()> {
/// let engine = ProcessEngine::new("bundle-engine", vec![])?;
/// let driver = BuildDriver::new(engine);
///
/// let request = BuildRequestBuilder::new()
///     .output_path("Build/Bundles")
///     .platform(Platform::Linux64)
///     .build()?;
///
/// let result = driver.build(&request, &[]).await?;
/// println!("success: {}", result.success);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BuildDriver<E> {
    engine: E,
}

impl<E: PackagingEngine> BuildDriver<E> {
    /// Creates a driver over the given engine.
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Runs one build.
    ///
    /// Ensures the output directory exists (idempotent), resolves the
    /// compression mode for every bundle, and delegates packaging to
    /// the engine. The engine call is treated as atomic: a failed
    /// build produces no usable output and is never retried here.
    ///
    /// # Errors
    ///
    /// Only invocation problems (IO, missing engine, malformed report)
    /// surface as `Err`; an engine-side failure is an `Ok` result with
    /// `success == false` and the engine's code passed through.
    pub async fn build(
        &self,
        request: &BuildRequest,
        bundles: &[BundleDescriptor],
    ) -> Result<BuildResult> {
        tokio::fs::create_dir_all(request.output_path()).await?;

        let entries: Vec<PackEntry> = bundles
            .iter()
            .map(|b| PackEntry::new(b, request.resolve_compression(&b.identifier)))
            .collect();

        let job = PackJob {
            params: PackParams::from_request(request),
            bundles: entries,
        };

        let outcome = self.engine.pack(&job).await?;

        if !outcome.code.is_success() {
            log::warn!("packaging engine reported {}", outcome.code);
            return Ok(BuildResult::failed(outcome.code));
        }

        // Collect artifact metadata
        let mut artifacts = Vec::with_capacity(outcome.artifacts.len());
        for path in outcome.artifacts {
            let path = if path.is_absolute() {
                path
            } else {
                request.output_path().join(path)
            };
            let metadata = tokio::fs::metadata(&path).await?;
            let checksum = calculate_sha256(&path).await?;
            artifacts.push(BuiltArtifact {
                path,
                size: metadata.len(),
                checksum,
            });
        }

        log::info!(
            "build finished with {} ({} artifact(s))",
            outcome.code,
            artifacts.len()
        );

        Ok(BuildResult {
            success: true,
            code: outcome.code,
            artifacts,
        })
    }

    /// Returns a reference to the engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}
