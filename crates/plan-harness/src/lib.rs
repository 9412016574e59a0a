// crates/plan-harness/src/lib.rs
// ============================================================================
// Module: Plan Harness Library
// Description: Drives a provisioning tool and checks its rendered plan.
// Purpose: Run init, validate and plan, then assert on the plan text.
// Dependencies: serde, thiserror, tracing, tracing-subscriber
// ============================================================================

//! ## Overview
//! This crate runs an infrastructure provisioning tool (`terraform` by
//! default) against a target directory and checks that the rendered
//! execution plan mentions the expected resources and outputs.
//!
//! The harness only ever issues `init`, `validate` and `plan`; nothing is
//! applied or destroyed. Tool steps fail fast, while plan checks accumulate
//! so one run reports every missing marker.
//!
//! ## Index
//! - Procedure: [`PlanHarness`], [`HarnessOutcome`]
//! - Tool seam: [`ToolRunner`], [`ProcessRunner`], [`Terraform`]
//! - Checks: [`Expectation`], [`ContainmentReport`], [`check_all`],
//!   [`eks_expectations`]
//! - Plan text: [`PlanOutput`], [`PlanSummary`]
//! - Configuration: [`ToolOptions`], [`config::HarnessConfig`]

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod checks;
pub mod command;
pub mod config;
pub mod error;
pub mod harness;
pub mod logging;
pub mod options;
pub mod plan;
pub mod runner;
pub mod terraform;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use checks::CheckOutcome;
pub use checks::ContainmentReport;
pub use checks::Expectation;
pub use checks::check_all;
pub use checks::eks_expectations;
pub use command::Subcommand;
pub use error::AssertionFailures;
pub use error::HarnessError;
pub use harness::HarnessOutcome;
pub use harness::PlanHarness;
pub use options::ToolOptions;
pub use plan::PlanOutput;
pub use plan::PlanSummary;
pub use runner::ProcessRunner;
pub use runner::ToolOutput;
pub use runner::ToolRunner;
pub use terraform::Terraform;
