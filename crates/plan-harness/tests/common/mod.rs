// crates/plan-harness/tests/common/mod.rs
// ============================================================================
// Module: Plan Harness Test Fixtures
// Description: Scripted tool runner and canned plan texts.
// Purpose: Exercise the harness without a real provisioning tool.
// Dependencies: plan-harness
// ============================================================================

//! ## Overview
//! [`ScriptedRunner`] answers each subcommand with a canned [`ToolOutput`] and
//! records every invocation so tests can assert which steps actually ran.

#![allow(dead_code, reason = "Shared fixtures are reused across multiple test binaries.")]
#![allow(clippy::expect_used, reason = "Test fixtures use expect for poisoned locks.")]

use std::collections::HashMap;
use std::sync::Mutex;

use plan_harness::HarnessError;
use plan_harness::Subcommand;
use plan_harness::ToolOptions;
use plan_harness::ToolOutput;
use plan_harness::ToolRunner;

/// Plan text for a definition declaring the cluster and both outputs.
pub const FULL_PLAN: &str = "\
Terraform used the selected providers to generate the following execution
plan. Resource actions are indicated with the following symbols:
  + create

Terraform will perform the following actions:

  # aws_eks_cluster.eks_cluster will be created
  + resource \"aws_eks_cluster\" \"eks_cluster\" {
      + arn      = (known after apply)
      + endpoint = (known after apply)
      + name     = \"plan-harness-demo\"
    }

Plan: 1 to add, 0 to change, 0 to destroy.

Changes to Outputs:
  + eks_cluster_endpoint = (known after apply)
  + eks_cluster_name     = \"plan-harness-demo\"
";

/// Plan text for a definition that dropped the endpoint output.
pub const PLAN_WITHOUT_ENDPOINT: &str = "\
Terraform will perform the following actions:

  # aws_eks_cluster.eks_cluster will be created
  + resource \"aws_eks_cluster\" \"eks_cluster\" {
      + name = \"plan-harness-demo\"
    }

Plan: 1 to add, 0 to change, 0 to destroy.

Changes to Outputs:
  + eks_cluster_name = \"plan-harness-demo\"
";

/// Runner that replays canned outputs and records invocations.
pub struct ScriptedRunner {
    responses: HashMap<Subcommand, ToolOutput>,
    calls: Mutex<Vec<Subcommand>>,
}

impl ScriptedRunner {
    /// Creates a runner where every step succeeds and plan prints `plan_text`.
    pub fn succeeding(plan_text: &str) -> Self {
        let mut responses = HashMap::new();
        responses.insert(Subcommand::Init, ToolOutput::ok("Terraform has been successfully initialized!"));
        responses.insert(Subcommand::Validate, ToolOutput::ok("Success! The configuration is valid."));
        responses.insert(Subcommand::Plan, ToolOutput::ok(plan_text));
        Self {
            responses,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Replaces the response for `step`.
    pub fn with_response(mut self, step: Subcommand, output: ToolOutput) -> Self {
        self.responses.insert(step, output);
        self
    }

    /// Returns the subcommands invoked so far.
    pub fn calls(&self) -> Vec<Subcommand> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl ToolRunner for ScriptedRunner {
    fn run(
        &self,
        subcommand: Subcommand,
        _options: &ToolOptions,
    ) -> Result<ToolOutput, HarnessError> {
        self.calls.lock().expect("calls lock").push(subcommand);
        Ok(self
            .responses
            .get(&subcommand)
            .cloned()
            .unwrap_or_else(|| ToolOutput::failed(1, format!("no scripted response for {subcommand}"))))
    }
}
