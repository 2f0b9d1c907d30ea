//! Subprocess adapter for a host-controlled packaging engine.
//!
//! The engine is an external command. The job is written to its stdin
//! as JSON; the outcome report is read back from its stdout as JSON.
//! A non-zero exit without a report maps to [`ReturnCode::Error`].

use super::{PackJob, PackOutcome, PackagingEngine, ReturnCode};
use crate::build::{Error, Result};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Packaging engine reached by spawning an external command.
#[derive(Clone, Debug)]
pub struct ProcessEngine {
    command: PathBuf,
    args: Vec<String>,
}

impl ProcessEngine {
    /// Creates a subprocess engine for `command`.
    ///
    /// The command is resolved through `PATH` up front so a missing
    /// engine is reported before any build work happens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EngineUnavailable`] when the command cannot be
    /// found.
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Result<Self> {
        let command = command.into();
        let resolved = which::which(&command)
            .map_err(|_| Error::EngineUnavailable {
                command: command.clone(),
            })?;
        log::debug!("packaging engine resolved to {}", resolved.display());

        Ok(Self {
            command: resolved,
            args,
        })
    }

    /// Returns the resolved engine command path.
    pub fn command(&self) -> &std::path::Path {
        &self.command
    }
}

impl PackagingEngine for ProcessEngine {
    async fn pack(&self, job: &PackJob) -> Result<PackOutcome> {
        let payload = serde_json::to_vec(job)?;

        log::info!(
            "invoking packaging engine {} for {} bundle(s)",
            self.command.display(),
            job.bundles.len()
        );

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .arg("pack")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        // stdin is piped above, so take() cannot return None
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(&payload).await?;
            stdin.shutdown().await?;
        }

        let output = child.wait_with_output().await?;

        if output.stdout.is_empty() {
            if output.status.success() {
                return Err(Error::MalformedReport(
                    "engine exited successfully without a report".to_string(),
                ));
            }
            log::warn!(
                "packaging engine exited with {:?} and no report",
                output.status.code()
            );
            return Ok(PackOutcome {
                code: ReturnCode::Error,
                artifacts: Vec::new(),
            });
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|e| Error::MalformedReport(e.to_string()))
    }
}
