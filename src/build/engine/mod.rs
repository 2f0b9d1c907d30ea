//! The packaging engine seam.
//!
//! All actual packaging work - dependency analysis, serialization,
//! compression, cache-server traffic - happens inside an external
//! engine reached through the single [`PackagingEngine::pack`]
//! operation. Everything on this side of the seam is parameter
//! assembly and return-code translation.

mod process;

pub use process::ProcessEngine;

use super::{BundleDescriptor, CacheServer, CompressionMode, Result};
use crate::build::request::BuildRequest;
use std::path::PathBuf;

/// Engine diagnostic code returned from a pack call.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnCode {
    /// Build completed and produced fresh output
    Success,
    /// Build completed from cached results
    SuccessCached,
    /// Nothing to do; existing output is already current
    SuccessNotRun,
    /// Generic engine failure
    Error,
    /// Engine crashed mid-build
    Exception,
    /// Build was canceled on the engine side
    Canceled,
    /// One or more member assets could not be found
    MissingRequiredObjects,
}

impl ReturnCode {
    /// Returns true for codes that represent a usable build output.
    pub fn is_success(self) -> bool {
        matches!(
            self,
            ReturnCode::Success | ReturnCode::SuccessCached | ReturnCode::SuccessNotRun
        )
    }
}

impl std::fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReturnCode::Success => "success",
            ReturnCode::SuccessCached => "success_cached",
            ReturnCode::SuccessNotRun => "success_not_run",
            ReturnCode::Error => "error",
            ReturnCode::Exception => "exception",
            ReturnCode::Canceled => "canceled",
            ReturnCode::MissingRequiredObjects => "missing_required_objects",
        };
        f.write_str(name)
    }
}

/// Engine-facing build parameters, serialized into the pack job.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PackParams {
    /// Directory the engine writes bundles into
    pub output_path: PathBuf,
    /// Target platform
    pub platform: super::Platform,
    /// Build group for the target platform
    pub build_group: super::BuildGroup,
    /// Discard cached results and rebuild everything
    pub force_rebuild: bool,
    /// Split bundle data into independently decompressible chunks
    pub chunked_compression: bool,
    /// Global compression mode (per-bundle modes are on the entries)
    pub compression: CompressionMode,
    /// Cache-server endpoint, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheServer>,
}

impl PackParams {
    /// Extracts engine parameters from a build request.
    pub fn from_request(request: &BuildRequest) -> Self {
        Self {
            output_path: request.output_path().to_path_buf(),
            platform: request.platform(),
            build_group: request.build_group(),
            force_rebuild: request.force_rebuild(),
            chunked_compression: request.chunked_compression(),
            compression: request.compression(),
            cache: request.cache().cloned(),
        }
    }
}

/// One bundle as handed to the engine: descriptor fields plus the
/// resolved compression mode for that bundle.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PackEntry {
    /// Bundle identifier
    pub identifier: String,
    /// Member asset paths, in load order
    pub assets: Vec<String>,
    /// Runtime lookup names, parallel to `assets`
    pub addressable_names: Vec<String>,
    /// Compression mode resolved for this bundle
    pub compression: CompressionMode,
}

impl PackEntry {
    /// Pairs a descriptor with its resolved compression mode.
    pub fn new(descriptor: &BundleDescriptor, compression: CompressionMode) -> Self {
        Self {
            identifier: descriptor.identifier.clone(),
            assets: descriptor.member_asset_paths.clone(),
            addressable_names: descriptor.addressable_names.clone(),
            compression,
        }
    }
}

/// Complete job description for one pack call.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PackJob {
    /// Engine-facing build parameters
    pub params: PackParams,
    /// Bundles to pack, with resolved compression
    pub bundles: Vec<PackEntry>,
}

/// Outcome reported back from a pack call.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PackOutcome {
    /// Engine diagnostic code
    pub code: ReturnCode,
    /// Paths of produced bundle files, relative to or inside the
    /// job's output directory
    #[serde(default)]
    pub artifacts: Vec<PathBuf>,
}

/// External packaging collaborator.
///
/// One operation: take a fully resolved job, return an outcome. The
/// call is assumed atomic (all-or-nothing); any retry or caching
/// behavior lives inside the engine.
#[allow(async_fn_in_trait)]
pub trait PackagingEngine {
    /// Packs the given bundles according to the job parameters.
    ///
    /// # Errors
    ///
    /// Only problems invoking or understanding the engine surface as
    /// `Err`; an engine-side build failure is an `Ok` outcome with a
    /// non-success [`ReturnCode`].
    async fn pack(&self, job: &PackJob) -> Result<PackOutcome>;
}
