// crates/plan-harness/src/terraform.rs
// ============================================================================
// Module: Tool Operations
// Description: Init, validate and plan on top of a tool runner.
// Purpose: Turn runner output into fail-fast step results.
// Dependencies: tracing, crate::runner
// ============================================================================

//! ## Overview
//! [`Terraform`] exposes the three operations the harness needs. Each one
//! runs exactly one subcommand and converts an unsuccessful exit into
//! [`HarnessError::Step`] carrying the tool's own error text.

use tracing::info;

use crate::command::Subcommand;
use crate::error::HarnessError;
use crate::options::ToolOptions;
use crate::plan::PlanOutput;
use crate::runner::ToolOutput;
use crate::runner::ToolRunner;

/// Provisioning tool driven through a [`ToolRunner`].
#[derive(Debug, Clone)]
pub struct Terraform<R> {
    /// Runner used for every invocation.
    runner: R,
}

impl<R: ToolRunner> Terraform<R> {
    /// Wraps `runner`.
    #[must_use]
    pub const fn new(runner: R) -> Self {
        Self {
            runner,
        }
    }

    /// Initializes the target directory.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError`] when the tool cannot run or exits unsuccessfully.
    pub fn init(&self, options: &ToolOptions) -> Result<(), HarnessError> {
        self.run_step(Subcommand::Init, options).map(drop)
    }

    /// Validates the definition in the target directory.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError`] when the tool cannot run or reports invalid
    /// configuration.
    pub fn validate(&self, options: &ToolOptions) -> Result<(), HarnessError> {
        self.run_step(Subcommand::Validate, options).map(drop)
    }

    /// Computes the execution plan and returns its text.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError`] when the tool cannot run or fails to plan.
    pub fn plan(&self, options: &ToolOptions) -> Result<PlanOutput, HarnessError> {
        let output = self.run_step(Subcommand::Plan, options)?;
        Ok(PlanOutput::new(output.stdout))
    }

    /// Runs one subcommand and rejects unsuccessful exits.
    fn run_step(
        &self,
        step: Subcommand,
        options: &ToolOptions,
    ) -> Result<ToolOutput, HarnessError> {
        info!(%step, dir = %options.terraform_dir().display(), "running tool step");
        let output = self.runner.run(step, options)?;
        if !output.success {
            return Err(HarnessError::Step {
                step,
                exit_code: output.exit_code,
                detail: output.failure_detail().to_string(),
            });
        }
        info!(%step, "tool step succeeded");
        Ok(output)
    }
}
