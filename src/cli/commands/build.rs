//! The build command: manifest in, engine call out.

use crate::build::{
    BuildDriver, BuildRequest, BuildRequestBuilder, BuildResult, CacheServer, ContentManifest,
    enumerate,
    engine::ProcessEngine,
};
use crate::cli::{Args, parse_override};
use crate::config::BuildConfig;
use crate::error::{BuildToolError, CliError, Result};
use anyhow::Context;

/// Report file written next to the built bundles.
const REPORT_FILE: &str = "build-report.json";

/// Tool-side record of one build, written alongside the artifacts.
///
/// The engine owns its own output catalog; this report only records
/// what this layer observed.
#[derive(Debug, serde::Serialize)]
struct BuildReport<'a> {
    platform: crate::build::Platform,
    built_at: chrono::DateTime<chrono::Utc>,
    #[serde(flatten)]
    result: &'a BuildResult,
}

/// Executes the build command, returning the process exit code.
pub async fn execute(args: &Args) -> Result<i32> {
    let config = BuildConfig::load_optional(args.config.as_deref())?;
    let request = assemble_request(args, &config)?;

    let manifest = ContentManifest::load(&args.manifest).await?;
    let bundles = enumerate(&manifest)?;

    if args.dry_run {
        println!(
            "{} bundle(s) for {:?} -> {} (chunked: {})",
            bundles.len(),
            request.platform(),
            request.output_path().display(),
            request.chunked_compression()
        );
        for bundle in &bundles {
            println!(
                "  {}: {} asset(s), compression {}",
                bundle.identifier,
                bundle.member_asset_paths.len(),
                request.resolve_compression(&bundle.identifier)
            );
            for (path, name) in bundle
                .member_asset_paths
                .iter()
                .zip(&bundle.addressable_names)
            {
                println!("    {} -> {}", path, name);
            }
        }
        return Ok(0);
    }

    let engine_command = args
        .engine
        .clone()
        .or_else(|| config.engine.command.clone())
        .ok_or(CliError::MissingArgument {
            argument: "engine".to_string(),
        })?;

    let engine = ProcessEngine::new(engine_command, config.engine.args.clone())?;
    let driver = BuildDriver::new(engine);

    let result = driver.build(&request, &bundles).await?;

    write_report(&request, &result).await?;

    if result.success {
        println!("Build succeeded ({})", result.code);
        for artifact in &result.artifacts {
            println!(
                "  {} ({} bytes, sha256 {})",
                artifact.path.display(),
                artifact.size,
                artifact.checksum
            );
        }
        Ok(0)
    } else {
        eprintln!("Build failed: engine reported {}", result.code);
        Ok(1)
    }
}

/// Merges CLI flags over config-file defaults into a build request.
fn assemble_request(args: &Args, config: &BuildConfig) -> Result<BuildRequest> {
    let mut builder = BuildRequestBuilder::new()
        .output_path(&args.out)
        .platform(args.platform)
        .force_rebuild(args.force_rebuild)
        .chunked_compression(
            args.chunked.or(config.build.chunked).unwrap_or(false),
        )
        .compression(
            args.compression
                .or(config.build.compression)
                .unwrap_or_default(),
        )
        .overrides(config.build.per_bundle_compression.clone());

    if let Some(group) = args.group {
        builder = builder.build_group(group);
    }

    // CLI overrides win over config-file overrides
    for spec in &args.overrides {
        let (name, mode) =
            parse_override(spec).map_err(|reason| CliError::InvalidArguments { reason })?;
        builder = builder.override_compression(name, mode);
    }

    if let Some(host) = &args.cache_host {
        builder = builder.cache(CacheServer {
            host: host.clone(),
            port: args.cache_port,
        });
    } else if let Some(cache) = &config.cache {
        builder = builder.cache(cache.clone());
    }

    builder.build().map_err(BuildToolError::from)
}

/// Writes the tool-side build report into the output directory.
async fn write_report(request: &BuildRequest, result: &BuildResult) -> Result<()> {
    let report = BuildReport {
        platform: request.platform(),
        built_at: chrono::Utc::now(),
        result,
    };

    let path = request.output_path().join(REPORT_FILE);
    let payload =
        serde_json::to_vec_pretty(&report).context("serializing build report")?;
    tokio::fs::write(&path, payload)
        .await
        .with_context(|| format!("writing build report to {}", path.display()))?;

    log::debug!("wrote build report to {}", path.display());
    Ok(())
}
