// crates/plan-harness/src/plan.rs
// ============================================================================
// Module: Plan Output
// Description: Captured plan text and its summary line.
// Purpose: Give checks read-only access to the rendered execution plan.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The plan text is opaque to the harness except for two markers the tool
//! always prints: the `Plan: ...` summary line and the `No changes.` line.
//! Both are located after stripping ANSI escape sequences so colored runs
//! parse the same as plain ones.

use serde::Serialize;

/// Summary line prefix.
const SUMMARY_PREFIX: &str = "Plan:";

/// Marker printed when the definition matches current state.
const NO_CHANGES_MARKER: &str = "No changes.";

/// Text rendered by the tool's plan operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOutput {
    /// Raw captured text.
    text: String,
}

impl PlanOutput {
    /// Wraps captured plan text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
        }
    }

    /// Returns the raw text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true when `needle` appears literally in the plan text.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    /// Parses the `Plan: ...` summary line, if the plan has one.
    #[must_use]
    pub fn summary(&self) -> Option<PlanSummary> {
        self.text.lines().find_map(|line| PlanSummary::parse(&strip_ansi(line)))
    }

    /// Returns true when any line starts with the `Plan:` prefix, whether or
    /// not it parses as a summary.
    #[must_use]
    pub fn has_summary_line(&self) -> bool {
        self.text.lines().any(|line| strip_ansi(line).trim_start().starts_with(SUMMARY_PREFIX))
    }

    /// Returns true when the tool reported that nothing would change.
    #[must_use]
    pub fn has_no_changes(&self) -> bool {
        self.text.lines().any(|line| strip_ansi(line).trim_start().starts_with(NO_CHANGES_MARKER))
    }
}

/// Resource counts from the plan summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlanSummary {
    /// Resources to import.
    pub import: u32,
    /// Resources to create.
    pub add: u32,
    /// Resources to update in place.
    pub change: u32,
    /// Resources to destroy.
    pub destroy: u32,
    /// Resources to drop from state without destroying them.
    pub forget: u32,
}

impl PlanSummary {
    /// Parses one summary line such as
    /// `Plan: 1 to add, 0 to change, 0 to destroy.`, optionally with leading
    /// `import` and trailing `forget` clauses.
    ///
    /// Returns `None` for any line that is not a well-formed summary.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let body = line.trim().strip_prefix(SUMMARY_PREFIX)?;
        let body = body.trim().strip_suffix('.')?;
        let mut summary = Self::default();
        let mut seen_add = false;
        for clause in body.split(',') {
            let (count, action) = clause.trim().split_once(" to ")?;
            let count: u32 = count.trim().parse().ok()?;
            match action.trim() {
                "import" => summary.import = count,
                "add" => {
                    summary.add = count;
                    seen_add = true;
                }
                "change" => summary.change = count,
                "destroy" => summary.destroy = count,
                "forget" => summary.forget = count,
                _ => return None,
            }
        }
        seen_add.then_some(summary)
    }
}

/// Removes ANSI escape sequences from `line`.
///
/// CSI (`ESC [ ... final`) and OSC (`ESC ] ... BEL` or `ESC ] ... ESC \`)
/// sequences are dropped whole. Any other escape drops only the character
/// after `ESC`.
fn strip_ansi(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\u{1b}' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('[') => {
                for next in chars.by_ref() {
                    if ('@' ..= '~').contains(&next) {
                        break;
                    }
                }
            }
            Some(']') => {
                while let Some(next) = chars.next() {
                    if next == '\u{7}' {
                        break;
                    }
                    if next == '\u{1b}' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => {}
        }
    }
    out
}

#[cfg(test)]
#[allow(
    clippy::panic,
    clippy::expect_used,
    reason = "Test-only assertions favor direct expect and panic for clarity."
)]
mod tests {
    use super::PlanOutput;
    use super::PlanSummary;
    use super::strip_ansi;

    const EKS_PLAN: &str = "\
Terraform will perform the following actions:

  # aws_eks_cluster.eks_cluster will be created
  + resource \"aws_eks_cluster\" \"eks_cluster\" {
      + name = \"demo\"
    }

Plan: 1 to add, 0 to change, 0 to destroy.

Changes to Outputs:
  + eks_cluster_endpoint = (known after apply)
  + eks_cluster_name     = \"demo\"
";

    #[test]
    fn summary_is_found_in_full_plan() {
        let plan = PlanOutput::new(EKS_PLAN);
        assert_eq!(
            plan.summary(),
            Some(PlanSummary {
                import: 0,
                add: 1,
                change: 0,
                destroy: 0,
                forget: 0,
            })
        );
        assert!(!plan.has_no_changes());
    }

    #[test]
    fn summary_accepts_import_clause() {
        let summary = PlanSummary::parse("Plan: 2 to import, 1 to add, 3 to change, 4 to destroy.");
        assert_eq!(
            summary,
            Some(PlanSummary {
                import: 2,
                add: 1,
                change: 3,
                destroy: 4,
                forget: 0,
            })
        );
    }

    #[test]
    fn summary_rejects_malformed_lines() {
        assert_eq!(PlanSummary::parse("Plan: one to add, 0 to change, 0 to destroy."), None);
        assert_eq!(PlanSummary::parse("Plan: 1 to add, 0 to change, 0 to destroy"), None);
        assert_eq!(PlanSummary::parse("Plan: 1 to launch."), None);
        assert_eq!(PlanSummary::parse("Changes to Outputs:"), None);
    }

    #[test]
    fn summary_accepts_forget_clause() {
        let summary = PlanSummary::parse("Plan: 0 to add, 0 to change, 2 to destroy, 1 to forget.")
            .expect("forget clause parses");
        assert_eq!(summary.destroy, 2);
        assert_eq!(summary.forget, 1);
    }

    #[test]
    fn unparsable_summary_line_is_still_detected() {
        let plan = PlanOutput::new("Plan: 0 to add, 2 to destroy, 1 to relocate.\n");
        assert_eq!(plan.summary(), None);
        assert!(plan.has_summary_line());
        assert!(!PlanOutput::new("No changes.\n").has_summary_line());
    }

    #[test]
    fn colored_summary_parses() {
        let plan = PlanOutput::new("\u{1b}[1mPlan:\u{1b}[0m 0 to add, 1 to change, 2 to destroy.\n");
        let summary = plan.summary().expect("summary present");
        assert_eq!(summary.change, 1);
        assert_eq!(summary.destroy, 2);
    }

    #[test]
    fn no_changes_marker_is_detected() {
        let plan = PlanOutput::new(
            "\u{1b}[32mNo changes.\u{1b}[0m Your infrastructure matches the configuration.\n",
        );
        assert!(plan.has_no_changes());
        assert_eq!(plan.summary(), None);
    }

    #[test]
    fn strip_ansi_keeps_plain_text() {
        assert_eq!(strip_ansi("plain"), "plain");
        assert_eq!(strip_ansi("\u{1b}[1;32mbold\u{1b}[0m"), "bold");
    }

    #[test]
    fn strip_ansi_drops_osc_sequences() {
        assert_eq!(strip_ansi("\u{1b}]8;;https://example.com\u{7}link\u{1b}]8;;\u{7}"), "link");
        assert_eq!(strip_ansi("\u{1b}]0;title\u{1b}\\Plan:"), "Plan:");
    }
}
