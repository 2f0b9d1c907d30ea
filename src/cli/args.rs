//! Command line argument parsing and validation.

use crate::build::{CompressionMode, DEFAULT_CACHE_PORT, Platform};
use clap::Parser;
use std::path::PathBuf;

/// Asset bundle build front-end for an external packaging engine
#[derive(Parser, Debug)]
#[command(
    name = "bundlebuild",
    version,
    about = "Asset bundle build front-end for an external packaging engine",
    long_about = "Enumerates bundles from a content manifest, resolves per-bundle compression, \
and drives an external packaging engine.

Usage:
  bundlebuild --manifest content.json --out Build/Bundles --platform linux64
  bundlebuild --manifest content.json --out Build/Bundles --platform android \\
      --compression lzma --override Bundle1=none --force-rebuild
  bundlebuild --manifest content.json --out Build/Bundles --platform ios --dry-run

Exit code 0 = the engine reported a usable build (or the dry run completed)."
)]
pub struct Args {
    /// Content manifest (JSON) listing bundles and their member assets
    #[arg(short, long, value_name = "PATH")]
    pub manifest: PathBuf,

    /// Output directory for built bundles
    #[arg(short, long, value_name = "DIR")]
    pub out: PathBuf,

    /// Target platform
    #[arg(short, long, value_enum)]
    pub platform: Platform,

    /// Build group (defaults to the platform's group)
    #[arg(long, value_enum)]
    pub group: Option<crate::build::BuildGroup>,

    /// Global compression mode (overridable per bundle)
    #[arg(short, long, value_enum)]
    pub compression: Option<CompressionMode>,

    /// Per-bundle compression override, NAME=MODE (repeatable)
    #[arg(long = "override", value_name = "NAME=MODE")]
    pub overrides: Vec<String>,

    /// Use chunk-based compression (`--chunked=false` overrides a
    /// config file that turns it on)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub chunked: Option<bool>,

    /// Rebuild everything, discarding cached engine results
    #[arg(short, long)]
    pub force_rebuild: bool,

    /// Cache server host
    #[arg(long, value_name = "HOST", env = "BUNDLEBUILD_CACHE_HOST")]
    pub cache_host: Option<String>,

    /// Cache server port
    #[arg(long, value_name = "PORT", default_value_t = DEFAULT_CACHE_PORT)]
    pub cache_port: u16,

    /// Packaging engine command (overrides the config file)
    #[arg(long, value_name = "COMMAND", env = "BUNDLEBUILD_ENGINE")]
    pub engine: Option<String>,

    /// Config file (defaults to ./bundlebuild.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enumerate bundles and print the resolved compression table
    /// without invoking the engine
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        for spec in &self.overrides {
            parse_override(spec)?;
        }

        Ok(())
    }
}

/// Parses one `NAME=MODE` override specification.
///
/// The mode accepts the same spellings as the `--compression` flag.
pub fn parse_override(spec: &str) -> Result<(String, CompressionMode), String> {
    use clap::ValueEnum;

    let (name, mode) = spec
        .split_once('=')
        .ok_or_else(|| format!("Invalid override {:?}: expected NAME=MODE", spec))?;

    if name.is_empty() {
        return Err(format!("Invalid override {:?}: empty bundle name", spec));
    }

    let mode = CompressionMode::from_str(mode, true)
        .map_err(|_| format!("Invalid override {:?}: unknown mode {:?}", spec, mode))?;

    Ok((name.to_string(), mode))
}
