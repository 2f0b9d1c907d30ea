//! Command line interface for the bundle build front-end.

mod args;
pub mod commands;

pub use args::{Args, parse_override};

use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();

    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    commands::build::execute(&args).await
}
