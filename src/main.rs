//! bundlebuild - Asset bundle build configuration front-end.
//!
//! This binary turns a content manifest plus build flags (platform,
//! compression policy, cache server) into a single invocation of an
//! external packaging engine, with proper error handling and artifact
//! verification.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match bundlebuild::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
