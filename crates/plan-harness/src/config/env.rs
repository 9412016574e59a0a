// crates/plan-harness/src/config/env.rs
// ============================================================================
// Module: Harness Environment
// Description: Environment-backed configuration for plan harness runs.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std, crate::error
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8, empty values and unknown boolean literals
//! fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use crate::error::HarnessError;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for plan harness configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessEnv {
    /// Optional override for the provisioning tool binary.
    TerraformBinary,
    /// Optional override for the target directory.
    TerraformDir,
    /// Enable colored tool output (`true`/`false` or `1`/`0`).
    Color,
    /// Optional artifact run root override.
    RunRoot,
    /// Allow reusing an existing run root (`true`/`false` or `1`/`0`).
    AllowOverwrite,
}

impl HarnessEnv {
    /// Every recognized key, in declaration order.
    pub const ALL: [Self; 5] =
        [Self::TerraformBinary, Self::TerraformDir, Self::Color, Self::RunRoot, Self::AllowOverwrite];

    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TerraformBinary => "PLAN_HARNESS_TERRAFORM_BIN",
            Self::TerraformDir => "PLAN_HARNESS_TERRAFORM_DIR",
            Self::Color => "PLAN_HARNESS_COLOR",
            Self::RunRoot => "PLAN_HARNESS_RUN_ROOT",
            Self::AllowOverwrite => "PLAN_HARNESS_ALLOW_OVERWRITE",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed harness configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HarnessConfig {
    /// Optional tool binary override.
    pub terraform_binary: Option<PathBuf>,
    /// Optional target directory override.
    pub terraform_dir: Option<PathBuf>,
    /// Whether the tool may emit ANSI color.
    pub color: bool,
    /// Optional artifact run root override.
    pub run_root: Option<PathBuf>,
    /// Allow reusing an existing run root.
    pub allow_overwrite: bool,
}

impl HarnessConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] when an environment value is not valid
    /// UTF-8, is empty, or fails validation (for example, an invalid boolean
    /// value).
    pub fn load() -> Result<Self, HarnessError> {
        Self::read_env().map_err(HarnessError::Config)
    }

    /// Reads every recognized key from the process environment.
    fn read_env() -> Result<Self, String> {
        let terraform_binary =
            read_env_nonempty(HarnessEnv::TerraformBinary.as_str())?.map(PathBuf::from);
        let terraform_dir = read_env_nonempty(HarnessEnv::TerraformDir.as_str())?.map(PathBuf::from);
        let color = parse_bool_env(
            HarnessEnv::Color.as_str(),
            read_env_nonempty(HarnessEnv::Color.as_str())?,
        )?;
        let run_root = read_env_nonempty(HarnessEnv::RunRoot.as_str())?.map(PathBuf::from);
        let allow_overwrite = parse_bool_env(
            HarnessEnv::AllowOverwrite.as_str(),
            read_env_nonempty(HarnessEnv::AllowOverwrite.as_str())?,
        )?;
        Ok(Self {
            terraform_binary,
            terraform_dir,
            color,
            run_root,
            allow_overwrite,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a boolean environment variable; unset means `false`.
///
/// # Errors
///
/// Returns an error when the value is not a recognized boolean literal.
fn parse_bool_env(name: &str, raw: Option<String>) -> Result<bool, String> {
    let Some(value) = raw else {
        return Ok(false);
    };
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(false);
    }
    Err(format!("{name} must be 1, 0, true, or false"))
}
