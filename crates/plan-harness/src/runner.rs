// crates/plan-harness/src/runner.rs
// ============================================================================
// Module: Tool Runner
// Description: Seam between the harness and the provisioning tool process.
// Purpose: Run one subcommand and hand back its decoded output.
// Dependencies: std::process, tracing
// ============================================================================

//! ## Overview
//! [`ToolRunner`] is the only boundary the harness crosses to reach the
//! external tool. [`ProcessRunner`] spawns the real binary; tests substitute
//! scripted runners. Runners report how the process ended and leave the
//! success decision to the caller.

use std::process::Command;
use std::process::Stdio;

use tracing::debug;

use crate::command::Subcommand;
use crate::error::HarnessError;
use crate::options::ToolOptions;

/// Environment variable the tool reads to trim interactive hints.
pub const AUTOMATION_ENV: &str = "TF_IN_AUTOMATION";

/// Decoded output of one tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Whether the process exited successfully.
    pub success: bool,
    /// Exit code, absent when the process was killed by a signal.
    pub exit_code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl ToolOutput {
    /// Builds a successful output carrying `stdout`.
    #[must_use]
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Builds a failed output with the given exit code and `stderr`.
    #[must_use]
    pub fn failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Returns the text that best explains a failure.
    #[must_use]
    pub fn failure_detail(&self) -> &str {
        let stderr = self.stderr.trim();
        if stderr.is_empty() { self.stdout.trim() } else { stderr }
    }
}

/// Executes tool subcommands.
pub trait ToolRunner {
    /// Runs `subcommand` with `options` and returns its output.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError`] when the process cannot be started or its
    /// output cannot be decoded. A non-zero exit is not an error here.
    fn run(&self, subcommand: Subcommand, options: &ToolOptions)
    -> Result<ToolOutput, HarnessError>;
}

impl<R: ToolRunner + ?Sized> ToolRunner for &R {
    fn run(
        &self,
        subcommand: Subcommand,
        options: &ToolOptions,
    ) -> Result<ToolOutput, HarnessError> {
        (**self).run(subcommand, options)
    }
}

/// Runner that spawns the tool binary as a child process.
///
/// # Invariants
/// - The child runs in the options' target directory with stdin closed.
/// - The child always sees `TF_IN_AUTOMATION=1`, even when the options'
///   extra environment names the same key.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    fn run(
        &self,
        subcommand: Subcommand,
        options: &ToolOptions,
    ) -> Result<ToolOutput, HarnessError> {
        let args = subcommand.args(options);
        debug!(
            binary = %options.binary().display(),
            dir = %options.terraform_dir().display(),
            args = ?args,
            "spawning tool"
        );
        let output = Command::new(options.binary())
            .args(&args)
            .current_dir(options.terraform_dir())
            .envs(options.env())
            .env(AUTOMATION_ENV, "1")
            .stdin(Stdio::null())
            .output()
            .map_err(|source| HarnessError::Spawn {
                step: subcommand,
                binary: options.binary().to_path_buf(),
                source,
            })?;
        Ok(ToolOutput {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: decode(subcommand, output.stdout)?,
            stderr: decode(subcommand, output.stderr)?,
        })
    }
}

/// Decodes a captured stream as strict UTF-8.
fn decode(step: Subcommand, bytes: Vec<u8>) -> Result<String, HarnessError> {
    String::from_utf8(bytes).map_err(|err| HarnessError::Decode {
        step,
        message: err.to_string(),
    })
}
