// system-tests/tests/helpers/tool.rs
// ============================================================================
// Module: Tool Helpers
// Description: Locate the provisioning tool and build options for a scenario.
// Purpose: Skip cleanly when the tool is not installed.
// Dependencies: plan-harness, std::process
// ============================================================================

//! Helpers for resolving the provisioning tool in system-tests.

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;

use plan_harness::ToolOptions;
use plan_harness::config::HarnessConfig;
use plan_harness::options::DEFAULT_BINARY;

/// A tool binary that answered `version`.
pub struct ToolCheck {
    pub binary: PathBuf,
    pub version: String,
}

/// Probes the configured tool binary with `version`.
///
/// Returns a human-readable reason when the tool is unusable so the caller
/// can record a skip.
pub fn resolve_tool(config: &HarnessConfig) -> Result<ToolCheck, String> {
    let binary = config.terraform_binary.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_BINARY));
    let output = Command::new(&binary)
        .args(["version", "-no-color"])
        .stdin(Stdio::null())
        .output()
        .map_err(|err| format!("{} unavailable: {err}", binary.display()))?;
    if !output.status.success() {
        return Err(format!(
            "{} version returned {}",
            binary.display(),
            output.status.code().unwrap_or(-1)
        ));
    }
    let version = String::from_utf8_lossy(&output.stdout).lines().next().unwrap_or_default().to_string();
    Ok(ToolCheck {
        binary,
        version,
    })
}

/// Builds options for a staged working directory.
pub fn scenario_options(config: &HarnessConfig, tool: &ToolCheck, workdir: &Path) -> ToolOptions {
    ToolOptions::new(workdir).with_binary(&tool.binary).with_color(config.color)
}
