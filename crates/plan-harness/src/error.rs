// crates/plan-harness/src/error.rs
// ============================================================================
// Module: Harness Errors
// Description: Error taxonomy for plan harness runs.
// Purpose: Separate fail-fast step errors from accumulated check failures.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every failure a harness run can surface is a [`HarnessError`]. Step-level
//! variants abort the run at the first failing tool operation; the
//! [`HarnessError::Assertions`] variant carries every failed check at once.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::command::Subcommand;

/// Errors raised while driving the provisioning tool.
///
/// # Invariants
/// - Variant meanings are stable for automation and tests.
/// - `Step` always names the operation that failed.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Environment configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
    /// The tool binary could not be started.
    #[error("failed to spawn {} for {step}: {source}", binary.display())]
    Spawn {
        /// Operation that was being started.
        step: Subcommand,
        /// Binary that failed to start.
        binary: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Tool output was not valid UTF-8.
    #[error("{step} produced non UTF-8 output: {message}")]
    Decode {
        /// Operation whose output failed to decode.
        step: Subcommand,
        /// Decoder error message.
        message: String,
    },
    /// A tool operation exited unsuccessfully.
    #[error("{step} failed ({}): {detail}", exit_label(*exit_code))]
    Step {
        /// Operation that failed.
        step: Subcommand,
        /// Exit code when the process exited normally.
        exit_code: Option<i32>,
        /// Tool-provided error text.
        detail: String,
    },
    /// One or more plan expectations failed.
    #[error("{0}")]
    Assertions(AssertionFailures),
}

impl HarnessError {
    /// Returns the operation a step-level error is attached to.
    #[must_use]
    pub const fn step(&self) -> Option<Subcommand> {
        match self {
            Self::Spawn {
                step, ..
            }
            | Self::Decode {
                step, ..
            }
            | Self::Step {
                step, ..
            } => Some(*step),
            Self::Config(_) | Self::Assertions(_) => None,
        }
    }
}

/// Renders an exit code for error messages.
fn exit_label(code: Option<i32>) -> String {
    code.map_or_else(|| "terminated by signal".to_string(), |code| format!("exit code {code}"))
}

/// Accumulated failure messages from a containment report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailures {
    /// Total number of checks evaluated.
    pub total: usize,
    /// One entry per failed check, in evaluation order.
    pub messages: Vec<String>,
}

impl fmt::Display for AssertionFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} plan checks failed", self.messages.len(), self.total)?;
        for message in &self.messages {
            write!(f, "\n  - {message}")?;
        }
        Ok(())
    }
}
