//! Script executor
//!
//! The single narrow interface through which generated text becomes a
//! running process. The descriptor's `exec` suggestion is never executed;
//! the command is always synthesized from the declared language and the
//! real artifact path, so the model cannot point execution elsewhere.

use crate::descriptor::ScriptLanguage;
use async_trait::async_trait;
use scriptforge_foundation::{Error, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Executes a materialized artifact and captures its output.
///
/// Implementations decide the isolation story; the pipeline only depends
/// on this seam.
#[async_trait]
pub trait ScriptExecutor: Send + Sync {
    /// Run the artifact, returning trimmed stdout on success. A non-zero
    /// exit surfaces as [`Error::Execution`] carrying the captured stderr.
    async fn run(&self, path: &Path, language: ScriptLanguage) -> Result<String>;
}

/// Executor that runs artifacts directly on the host
pub struct LocalExecutor;

impl LocalExecutor {
    /// Create a new local executor
    pub fn new() -> Self {
        Self
    }

    /// The real run command: `python3 <path>` or `bash <path>`
    fn run_command(path: &Path, language: ScriptLanguage) -> String {
        format!("{} {}", language.interpreter(), path.display())
    }
}

impl Default for LocalExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScriptExecutor for LocalExecutor {
    async fn run(&self, path: &Path, language: ScriptLanguage) -> Result<String> {
        let command = Self::run_command(path, language);
        tracing::debug!(%command, "Executing script");

        // Blocks this request until the subordinate process terminates; no
        // timeout or cancellation exists at this layer.
        let output = Command::new("sh")
            .arg("-c")
            .arg(&command)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| Error::Execution {
                exit_code: -1,
                stderr: format!("Failed to spawn process: {}", e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if output.status.success() {
            Ok(stdout.trim().to_string())
        } else {
            let exit_code = output.status.code().unwrap_or(-1);
            tracing::error!(exit_code, "Script execution failed");
            Err(Error::Execution {
                exit_code,
                stderr: stderr.to_string(),
            })
        }
    }
}
