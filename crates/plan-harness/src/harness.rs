// crates/plan-harness/src/harness.rs
// ============================================================================
// Module: Plan-Assertion Harness
// Description: Initialize, validate, plan, then check the plan text.
// Purpose: Drive the fixed step sequence and report check outcomes.
// Dependencies: tracing, crate::terraform, crate::checks
// ============================================================================

//! ## Overview
//! [`PlanHarness`] runs the tool steps strictly in order and stops at the
//! first failing one. Once a plan exists, every expectation is evaluated and
//! the run fails if any of them did not hold.
//! Invariants:
//! - Init, validate and plan each run at most once per [`PlanHarness::run`].
//! - No step runs after a failed step.
//! - Checks only ever see the text captured from this run's plan.

use tracing::info;

use crate::checks::ContainmentReport;
use crate::checks::Expectation;
use crate::checks::check_all;
use crate::error::HarnessError;
use crate::options::ToolOptions;
use crate::plan::PlanOutput;
use crate::runner::ToolRunner;
use crate::terraform::Terraform;

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessOutcome {
    /// Captured plan text.
    pub plan: PlanOutput,
    /// Outcome of every expectation.
    pub report: ContainmentReport,
}

impl HarnessOutcome {
    /// Fails when any expectation failed.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Assertions`] listing every failed check.
    pub fn into_result(self) -> Result<Self, HarnessError> {
        let Self {
            plan,
            report,
        } = self;
        let report = report.into_result()?;
        Ok(Self {
            plan,
            report,
        })
    }
}

/// Plan-assertion harness bound to a runner, options and expectations.
#[derive(Debug, Clone)]
pub struct PlanHarness<R> {
    /// Tool operations.
    terraform: Terraform<R>,
    /// Options shared by every step.
    options: ToolOptions,
    /// Checks applied to the plan text.
    expectations: Vec<Expectation>,
}

impl<R: ToolRunner> PlanHarness<R> {
    /// Creates a harness with no expectations.
    #[must_use]
    pub const fn new(runner: R, options: ToolOptions) -> Self {
        Self {
            terraform: Terraform::new(runner),
            options,
            expectations: Vec::new(),
        }
    }

    /// Appends an expectation.
    #[must_use]
    pub fn with_expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }

    /// Appends several expectations.
    #[must_use]
    pub fn with_expectations(mut self, expectations: impl IntoIterator<Item = Expectation>) -> Self {
        self.expectations.extend(expectations);
        self
    }

    /// Returns the options shared by every step.
    #[must_use]
    pub const fn options(&self) -> &ToolOptions {
        &self.options
    }

    /// Returns the configured expectations.
    #[must_use]
    pub fn expectations(&self) -> &[Expectation] {
        &self.expectations
    }

    /// Runs init, validate and plan, then evaluates every expectation.
    ///
    /// Failed checks do not make this return `Err`; inspect the report or
    /// call [`HarnessOutcome::into_result`].
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError`] from the first tool step that fails.
    pub fn run(&self) -> Result<HarnessOutcome, HarnessError> {
        self.terraform.init(&self.options)?;
        self.terraform.validate(&self.options)?;
        let plan = self.terraform.plan(&self.options)?;
        let report = check_all(&plan, &self.expectations);
        info!(
            checks = report.outcomes.len(),
            failed = report.failures().count(),
            "plan checks evaluated"
        );
        Ok(HarnessOutcome {
            plan,
            report,
        })
    }

    /// Runs the harness and fails on any step error or failed check.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError`] from the first failed step, or
    /// [`HarnessError::Assertions`] when any check failed.
    pub fn verify(&self) -> Result<HarnessOutcome, HarnessError> {
        self.run()?.into_result()
    }
}
