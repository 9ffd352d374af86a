//! The process-invocation collaborator.
//!
//! High-level code depends on the [`ProcessRunner`] trait rather than on
//! `tokio::process` directly, which keeps the scan pipeline testable with
//! a stub runner. The real implementation streams scanner output line by
//! line so the terminal layer can render it as it arrives.

use std::process::Stdio;

use anyhow::Context;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{info, warn};

/// Receives each stdout line from the external binary as it arrives.
pub type OutputCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Runs an external program with discrete argv tokens.
///
/// The tokens are never joined into a shell string.
#[async_trait]
pub trait ProcessRunner {
    /// Runs `program` with `argv` and returns its exit code.
    ///
    /// The exit code is returned as-is; interpreting it is the caller's
    /// business.
    async fn run(&self, program: &str, argv: &[String]) -> anyhow::Result<i32>;
}

/// [`ProcessRunner`] backed by `tokio::process`.
pub struct NmapRunner {
    on_output: Option<OutputCallback>,
}

impl NmapRunner {
    pub fn new(on_output: Option<OutputCallback>) -> Self {
        Self { on_output }
    }
}

#[async_trait]
impl ProcessRunner for NmapRunner {
    async fn run(&self, program: &str, argv: &[String]) -> anyhow::Result<i32> {
        let mut child = Command::new(program)
            .args(argv)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to start '{program}', is it installed?"))?;

        let stdout = child
            .stdout
            .take()
            .context("child stdout was not captured")?;
        let stderr = child
            .stderr
            .take()
            .context("child stderr was not captured")?;

        let stderr_pump = tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                warn!("{line}");
            }
        });

        let mut lines = BufReader::new(stdout).lines();
        while let Some(line) = lines.next_line().await? {
            match &self.on_output {
                Some(callback) => callback(&line),
                None => info!("{line}"),
            }
        }

        let status = child
            .wait()
            .await
            .context("failed waiting for the scanner to exit")?;
        let _ = stderr_pump.await;

        Ok(status.code().unwrap_or(-1))
    }
}
