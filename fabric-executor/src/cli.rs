//! `tokio::process` implementation of [`CommandRunner`].

use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use fabric_core::{InvocationId, InvocationResult};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::backend::CommandRunner;
use crate::{CliConfig, ExecutorError};

/// Spawns the `fabric` binary directly, without a shell.
///
/// # Cancel Safety
/// Cancel safe. Dropping the future kills the child via `kill_on_drop`.
#[derive(Debug, Clone)]
pub struct FabricCli {
    config: CliConfig,
}

impl FabricCli {
    /// Create a runner for the configured binary.
    #[must_use]
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    async fn execute(
        &self,
        args: &[String],
        stdin: Option<&str>,
    ) -> Result<InvocationResult, ExecutorError> {
        let mut child = Command::new(&self.config.binary_path)
            .args(args)
            .stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ExecutorError::SpawnFailed {
                path: self.config.binary_path.clone(),
                source,
            })?;

        // Feed stdin from its own task so a large payload cannot deadlock
        // against a full stdout pipe. Dropping the handle closes stdin.
        if let (Some(payload), Some(mut pipe)) = (stdin, child.stdin.take()) {
            let payload = payload.to_owned();
            tokio::spawn(async move {
                if let Err(e) = pipe.write_all(payload.as_bytes()).await {
                    tracing::debug!(error = %e, "child closed stdin before reading all input");
                }
            });
        }

        let output = tokio::time::timeout(self.config.timeout, child.wait_with_output())
            .await
            .map_err(|_| ExecutorError::TimedOut)??;

        Ok(InvocationResult::from_exit(
            output.status.success(),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }
}

#[async_trait]
impl CommandRunner for FabricCli {
    async fn run(&self, args: &[String], stdin: Option<&str>) -> InvocationResult {
        let invocation_id = InvocationId::new();
        let start = Instant::now();

        tracing::info!(
            %invocation_id,
            binary = %self.config.binary_path.display(),
            argc = args.len(),
            stdin = stdin.is_some(),
            "invoking fabric"
        );

        match self.execute(args, stdin).await {
            Ok(result) => {
                tracing::info!(
                    %invocation_id,
                    success = result.success,
                    output_bytes = result.output.len(),
                    elapsed_ms = start.elapsed().as_millis(),
                    "fabric exited"
                );
                result
            }
            Err(ExecutorError::TimedOut) => {
                tracing::warn!(
                    %invocation_id,
                    timeout_secs = self.config.timeout.as_secs(),
                    "fabric timed out"
                );
                InvocationResult::timed_out()
            }
            Err(e) => {
                tracing::warn!(%invocation_id, error = %e, "fabric invocation failed");
                InvocationResult::failed(e.to_string())
            }
        }
    }
}
