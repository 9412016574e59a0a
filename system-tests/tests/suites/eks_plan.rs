// system-tests/tests/suites/eks_plan.rs
// ============================================================================
// Module: EKS Plan Tests
// Description: End-to-end plan checks against the EKS definition.
// Purpose: Run init, validate and plan with the real tool and check the plan.
// Dependencies: system-tests helpers, plan-harness
// ============================================================================

//! EKS plan coverage for plan harness system-tests.

use std::fs;
use std::path::Path;

use helpers::artifacts::TestReporter;
use helpers::tool::ToolCheck;
use helpers::tool::resolve_tool;
use helpers::tool::scenario_options;
use plan_harness::HarnessError;
use plan_harness::HarnessOutcome;
use plan_harness::PlanHarness;
use plan_harness::ProcessRunner;
use plan_harness::Subcommand;
use plan_harness::config::HarnessConfig;
use plan_harness::eks_expectations;
use plan_harness::logging;
use system_tests::fixtures::eks_definition_dir;
use system_tests::fixtures::stage_definition;

use crate::helpers;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Resolved state shared by every scenario.
struct Scenario {
    reporter: TestReporter,
    config: HarnessConfig,
    tool: ToolCheck,
}

impl Scenario {
    /// Prepares a scenario or records a skip when the tool is missing.
    fn start(test_name: &str) -> Result<Option<Self>, Box<dyn std::error::Error>> {
        logging::init();
        let mut reporter = TestReporter::new(test_name)?;
        let config = HarnessConfig::load()?;
        let tool = match resolve_tool(&config) {
            Ok(tool) => tool,
            Err(reason) => {
                reporter.finish("skip", vec![reason], summary_artifacts(&[]))?;
                return Ok(None);
            }
        };
        let source = config.terraform_dir.clone().unwrap_or_else(eks_definition_dir);
        stage_definition(&source, &reporter.artifacts().workdir())?;
        Ok(Some(Self {
            reporter,
            config,
            tool,
        }))
    }

    fn workdir(&self) -> std::path::PathBuf {
        self.reporter.artifacts().workdir()
    }

    fn harness(&self) -> PlanHarness<ProcessRunner> {
        let options = scenario_options(&self.config, &self.tool, &self.workdir());
        PlanHarness::new(ProcessRunner, options).with_expectations(eks_expectations())
    }

    /// Writes the plan text and check outcomes as artifacts.
    fn record(&self, prefix: &str, outcome: &HarnessOutcome) -> std::io::Result<Vec<String>> {
        let plan_name = format!("{prefix}plan.txt");
        let report_name = format!("{prefix}containment.json");
        self.reporter.artifacts().write_text(&plan_name, outcome.plan.as_str())?;
        self.reporter.artifacts().write_json(&report_name, &outcome.report)?;
        Ok(vec![plan_name, report_name])
    }

    fn pass(mut self, mut notes: Vec<String>, artifacts: &[String]) -> std::io::Result<()> {
        notes.insert(0, format!("tool: {}", self.tool.version));
        self.reporter.finish("pass", notes, summary_artifacts(artifacts))
    }
}

fn summary_artifacts(extra: &[String]) -> Vec<String> {
    let mut artifacts = vec!["summary.json".to_string(), "summary.md".to_string()];
    artifacts.extend_from_slice(extra);
    artifacts
}

fn rewrite(workdir: &Path, file: &str, contents: &str) -> std::io::Result<()> {
    fs::write(workdir.join(file), contents)
}

#[test]
fn eks_plan_contains_cluster_and_outputs() -> TestResult {
    let Some(scenario) = Scenario::start("eks_plan_contains_cluster_and_outputs")? else {
        return Ok(());
    };
    let outcome = scenario.harness().run()?;
    let artifacts = scenario.record("", &outcome)?;
    let outcome = outcome.into_result()?;

    let summary = outcome.plan.summary().ok_or("plan summary missing")?;
    if summary.destroy != 0 {
        return Err(format!("fresh plan proposes {} destroys", summary.destroy).into());
    }
    scenario.pass(vec![format!("plan adds {} resources", summary.add)], &artifacts)?;
    Ok(())
}

#[test]
fn eks_plan_is_stable_across_reruns() -> TestResult {
    let Some(scenario) = Scenario::start("eks_plan_is_stable_across_reruns")? else {
        return Ok(());
    };
    let harness = scenario.harness();
    let first = harness.verify()?;
    let second = harness.verify()?;
    let mut artifacts = scenario.record("first.", &first)?;
    artifacts.extend(scenario.record("second.", &second)?);

    if first.report != second.report {
        return Err("containment results differ between runs".into());
    }
    scenario.pass(vec!["two runs produced identical check outcomes".to_string()], &artifacts)?;
    Ok(())
}

#[test]
fn eks_plan_reports_missing_endpoint_output() -> TestResult {
    let Some(scenario) = Scenario::start("eks_plan_reports_missing_endpoint_output")? else {
        return Ok(());
    };
    rewrite(
        &scenario.workdir(),
        "outputs.tf",
        "output \"eks_cluster_name\" {\n  value = aws_eks_cluster.eks_cluster.name\n}\n",
    )?;
    let outcome = scenario.harness().run()?;
    let artifacts = scenario.record("", &outcome)?;

    let failed: Vec<&str> =
        outcome.report.failures().map(|outcome| outcome.expectation.message()).collect();
    if failed != ["The plan should contain the eks_cluster_endpoint output"] {
        return Err(format!("unexpected failed checks: {}", failed.join("; ")).into());
    }
    scenario.pass(vec!["exactly the endpoint check failed".to_string()], &artifacts)?;
    Ok(())
}

#[test]
fn eks_plan_aborts_on_invalid_definition() -> TestResult {
    let Some(scenario) = Scenario::start("eks_plan_aborts_on_invalid_definition")? else {
        return Ok(());
    };
    rewrite(&scenario.workdir(), "broken.tf", "output \"broken\" {\n  value = var.undeclared\n}\n")?;

    match scenario.harness().run() {
        Err(err @ HarnessError::Step {
            step: Subcommand::Validate,
            ..
        }) => {
            scenario.reporter.artifacts().write_text("validate.err.txt", &err.to_string())?;
            let artifacts = vec!["validate.err.txt".to_string()];
            scenario.pass(vec!["validate rejected the definition".to_string()], &artifacts)?;
            Ok(())
        }
        Err(err) => Err(format!("expected validate failure, got: {err}").into()),
        Ok(_) => Err("invalid definition produced a plan".into()),
    }
}
