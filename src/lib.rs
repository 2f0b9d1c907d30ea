//! Asset bundle build configuration library.
//!
//! This library provides the configuration layer for asset-bundle builds:
//! - Bundle enumeration from a content manifest
//! - Per-bundle compression resolution with a global fallback
//! - A build driver that parametrizes an external packaging engine
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod build;
pub mod cli;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use error::{BuildToolError, CliError, Result};
