// crates/plan-harness/src/options.rs
// ============================================================================
// Module: Tool Options
// Description: Immutable settings shared by every tool invocation.
// Purpose: Describe where and how the provisioning tool runs.
// Dependencies: std, crate::config
// ============================================================================

//! ## Overview
//! [`ToolOptions`] is built once per harness run and then only borrowed. The
//! working directory is the one required setting; everything else has a
//! default that keeps runs non-interactive and output deterministic.

use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use crate::config::HarnessConfig;

/// Binary used when no override is configured.
pub const DEFAULT_BINARY: &str = "terraform";

/// Settings for invoking the provisioning tool.
///
/// # Invariants
/// - Variables and environment entries are kept sorted by key.
/// - Color is disabled unless requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOptions {
    /// Directory containing the definition under test.
    terraform_dir: PathBuf,
    /// Tool binary name or path.
    binary: PathBuf,
    /// Input variables passed to `plan`.
    vars: BTreeMap<String, String>,
    /// Extra environment for the child process.
    env: BTreeMap<String, String>,
    /// Whether ANSI color is allowed in tool output.
    color: bool,
}

impl ToolOptions {
    /// Creates options targeting `terraform_dir` with defaults for the rest.
    #[must_use]
    pub fn new(terraform_dir: impl Into<PathBuf>) -> Self {
        Self {
            terraform_dir: terraform_dir.into(),
            binary: PathBuf::from(DEFAULT_BINARY),
            vars: BTreeMap::new(),
            env: BTreeMap::new(),
            color: false,
        }
    }

    /// Builds options from environment configuration.
    ///
    /// `default_dir` is used when the configuration carries no directory
    /// override.
    #[must_use]
    pub fn from_config(config: &HarnessConfig, default_dir: impl Into<PathBuf>) -> Self {
        let dir = config.terraform_dir.clone().unwrap_or_else(|| default_dir.into());
        let mut options = Self::new(dir).with_color(config.color);
        if let Some(binary) = &config.terraform_binary {
            options = options.with_binary(binary.clone());
        }
        options
    }

    /// Overrides the tool binary.
    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Adds an input variable for `plan`.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Adds an environment variable for the child process.
    #[must_use]
    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    /// Enables or disables colored output.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Returns the target directory.
    #[must_use]
    pub fn terraform_dir(&self) -> &Path {
        &self.terraform_dir
    }

    /// Returns the tool binary.
    #[must_use]
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Returns the input variables.
    #[must_use]
    pub const fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    /// Returns the extra child environment.
    #[must_use]
    pub const fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// Returns whether color is allowed.
    #[must_use]
    pub const fn color(&self) -> bool {
        self.color
    }
}
