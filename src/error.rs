//! Error types for build-tool operations.
//!
//! This module defines the crate-level error type wrapping CLI, IO,
//! serialization, and build-domain errors.

use thiserror::Error;

/// Result type alias for build-tool operations
pub type Result<T> = std::result::Result<T, BuildToolError>;

/// Main error type for all build-tool operations
#[derive(Error, Debug)]
pub enum BuildToolError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Build-domain errors
    #[error("Build error: {0}")]
    Build(#[from] crate::build::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },
}
