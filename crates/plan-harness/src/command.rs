// crates/plan-harness/src/command.rs
// ============================================================================
// Module: Tool Subcommands
// Description: The closed set of operations the harness may issue.
// Purpose: Render argument vectors for init, validate and plan.
// Dependencies: crate::options
// ============================================================================

//! ## Overview
//! Only read-side operations exist here. There is no apply or destroy
//! variant, so the harness cannot provision or tear down infrastructure.

use std::fmt;

use crate::options::ToolOptions;

/// Operation issued to the provisioning tool.
///
/// # Invariants
/// - Variants are stable for logging and error reporting.
/// - Declaration order is execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcommand {
    /// Initialize the working directory.
    Init,
    /// Validate the definition.
    Validate,
    /// Compute the execution plan.
    Plan,
}

impl Subcommand {
    /// Returns the tool's name for the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Validate => "validate",
            Self::Plan => "plan",
        }
    }

    /// Renders the full argument vector for this operation.
    #[must_use]
    pub fn args(self, options: &ToolOptions) -> Vec<String> {
        let mut args = vec![self.as_str().to_string()];
        match self {
            Self::Init => {
                args.push("-input=false".to_string());
            }
            Self::Validate => {}
            Self::Plan => {
                args.push("-input=false".to_string());
                args.push("-lock=false".to_string());
                for (name, value) in options.vars() {
                    args.push("-var".to_string());
                    args.push(format!("{name}={value}"));
                }
            }
        }
        if !options.color() {
            args.push("-no-color".to_string());
        }
        args
    }
}

impl fmt::Display for Subcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
