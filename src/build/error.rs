//! Build-domain error types.

use thiserror::Error;

/// Result type alias for build-domain operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while preparing or driving a build.
///
/// An engine returning a non-success code is NOT an error here: the
/// driver passes that through as a failed [`BuildResult`]. Only problems
/// that prevent the engine call from happening (or from being
/// interpreted) surface as `Err`.
///
/// [`BuildResult`]: crate::build::BuildResult
#[derive(Error, Debug)]
pub enum Error {
    /// The content manifest is malformed where content is expected.
    ///
    /// Reported before any engine call; the build is aborted.
    #[error("invalid manifest: {reason}")]
    InvalidManifest {
        /// What was wrong with the manifest
        reason: String,
    },

    /// A required build-request field was not provided to the builder.
    #[error("incomplete build request: {field} is required")]
    IncompleteRequest {
        /// Missing field name
        field: &'static str,
    },

    /// The configured packaging engine command cannot be found.
    #[error("packaging engine not found: {command}")]
    EngineUnavailable {
        /// Command that was looked up
        command: String,
    },

    /// The engine produced output that is not a valid outcome report.
    #[error("malformed engine report: {0}")]
    MalformedReport(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for an [`Error::InvalidManifest`] with a formatted reason.
    pub fn invalid_manifest(reason: impl Into<String>) -> Self {
        Error::InvalidManifest {
            reason: reason.into(),
        }
    }
}
