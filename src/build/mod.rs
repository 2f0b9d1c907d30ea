//! Asset bundle build configuration and driving.
//!
//! This module contains the build-domain types: the immutable
//! [`BuildRequest`], bundle enumeration from a content manifest,
//! per-bundle compression resolution, and the [`BuildDriver`] that
//! hands the assembled job to an external packaging engine.

mod checksum;
mod compression;
mod driver;
pub mod engine;
mod error;
mod manifest;
mod request;

// Re-export all public types
pub use checksum::calculate_sha256;
pub use compression::{CompressionMode, CompressionOverrides, CompressionPolicy};
pub use driver::{BuildDriver, BuildResult, BuiltArtifact};
pub use engine::{PackEntry, PackJob, PackOutcome, PackParams, PackagingEngine, ReturnCode};
pub use error::{Error, Result};
pub use manifest::{BundleDescriptor, ContentManifest, enumerate};
pub use request::{
    BuildGroup, BuildRequest, BuildRequestBuilder, CacheServer, DEFAULT_CACHE_PORT, Platform,
};
