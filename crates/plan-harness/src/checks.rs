// crates/plan-harness/src/checks.rs
// ============================================================================
// Module: Plan Checks
// Description: Expectations evaluated against captured plan text.
// Purpose: Evaluate every check and accumulate failures without short-circuit.
// Dependencies: serde, tracing
// ============================================================================

//! ## Overview
//! An [`Expectation`] is one check against a [`PlanOutput`]. [`check_all`]
//! evaluates every expectation in order and records each outcome, so a single
//! run reports all missing markers at once.
//! Invariants:
//! - Evaluation never stops at the first failure.
//! - Report order matches expectation order.

use serde::Serialize;
use tracing::warn;

use crate::error::AssertionFailures;
use crate::error::HarnessError;
use crate::plan::PlanOutput;

// ============================================================================
// SECTION: Expectations
// ============================================================================

/// A single check against plan text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expectation {
    /// The plan text contains `needle` literally.
    Contains {
        /// Substring to look for.
        needle: String,
        /// Message reported when the substring is missing.
        message: String,
    },
    /// The plan proposes no destroys.
    ///
    /// A plan without any `Plan:` line passes. A `Plan:` line that does not
    /// parse fails.
    NoDestroy {
        /// Message reported when destroys are proposed.
        message: String,
    },
}

impl Expectation {
    /// Builds a containment check.
    #[must_use]
    pub fn contains(needle: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Contains {
            needle: needle.into(),
            message: message.into(),
        }
    }

    /// Builds a no-destroy check.
    #[must_use]
    pub fn no_destroy(message: impl Into<String>) -> Self {
        Self::NoDestroy {
            message: message.into(),
        }
    }

    /// Returns the failure message for this check.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Contains {
                message, ..
            }
            | Self::NoDestroy {
                message,
            } => message,
        }
    }

    /// Evaluates the check against `plan`.
    #[must_use]
    pub fn holds(&self, plan: &PlanOutput) -> bool {
        match self {
            Self::Contains {
                needle, ..
            } => plan.contains(needle),
            Self::NoDestroy {
                ..
            } => plan
                .summary()
                .map_or_else(|| !plan.has_summary_line(), |summary| summary.destroy == 0),
        }
    }
}

/// The four checks applied to the EKS definition's plan.
#[must_use]
pub fn eks_expectations() -> Vec<Expectation> {
    vec![
        Expectation::contains("eks_cluster", "The plan should contain an EKS cluster resource"),
        Expectation::contains(
            "eks_cluster_name",
            "The plan should contain the eks_cluster_name output",
        ),
        Expectation::contains(
            "eks_cluster_endpoint",
            "The plan should contain the eks_cluster_endpoint output",
        ),
        Expectation::contains("Plan:", "The plan should contain a plan summary"),
    ]
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Outcome of one expectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// The evaluated expectation.
    pub expectation: Expectation,
    /// Whether it held.
    pub passed: bool,
}

/// Outcomes of every expectation in a run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ContainmentReport {
    /// Outcomes in evaluation order.
    pub outcomes: Vec<CheckOutcome>,
}

impl ContainmentReport {
    /// Returns true when every check held.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    /// Returns the outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed)
    }

    /// Converts the report into a result, failing when any check failed.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Assertions`] listing every failed message.
    pub fn into_result(self) -> Result<Self, HarnessError> {
        if self.is_success() {
            return Ok(self);
        }
        let messages = self.failures().map(|outcome| outcome.expectation.message().to_string());
        Err(HarnessError::Assertions(AssertionFailures {
            total: self.outcomes.len(),
            messages: messages.collect(),
        }))
    }
}

/// Evaluates every expectation against `plan`.
#[must_use]
pub fn check_all(plan: &PlanOutput, expectations: &[Expectation]) -> ContainmentReport {
    let outcomes = expectations
        .iter()
        .map(|expectation| {
            let passed = expectation.holds(plan);
            if !passed {
                warn!(check = expectation.message(), "plan check failed");
            }
            CheckOutcome {
                expectation: expectation.clone(),
                passed,
            }
        })
        .collect();
    ContainmentReport {
        outcomes,
    }
}

#[cfg(test)]
#[allow(
    clippy::panic,
    clippy::expect_used,
    reason = "Test-only assertions favor direct expect and panic for clarity."
)]
mod tests {
    use super::Expectation;
    use super::check_all;
    use super::eks_expectations;
    use crate::error::HarnessError;
    use crate::plan::PlanOutput;

    fn expectations() -> Vec<Expectation> {
        vec![
            Expectation::contains("alpha", "alpha missing"),
            Expectation::contains("beta", "beta missing"),
            Expectation::contains("gamma", "gamma missing"),
        ]
    }

    #[test]
    fn every_failure_is_reported() {
        let plan = PlanOutput::new("beta only");
        let report = check_all(&plan, &expectations());
        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.failures().count(), 2);

        let Err(HarnessError::Assertions(failures)) = report.into_result() else {
            panic!("expected assertion failures");
        };
        assert_eq!(failures.total, 3);
        assert_eq!(failures.messages, ["alpha missing", "gamma missing"]);
        assert!(failures.to_string().starts_with("2 of 3 plan checks failed"));
    }

    #[test]
    fn all_present_passes() {
        let plan = PlanOutput::new("alpha beta gamma");
        let report = check_all(&plan, &expectations()).into_result().expect("checks pass");
        assert!(report.is_success());
    }

    #[test]
    fn no_destroy_uses_summary() {
        let check = [Expectation::no_destroy("destroys proposed")];
        let destroying = PlanOutput::new("Plan: 0 to add, 0 to change, 1 to destroy.");
        assert!(!check_all(&destroying, &check).is_success());

        let creating = PlanOutput::new("Plan: 3 to add, 0 to change, 0 to destroy.");
        assert!(check_all(&creating, &check).is_success());

        let unchanged = PlanOutput::new("No changes.");
        assert!(check_all(&unchanged, &check).is_success());
    }

    #[test]
    fn no_destroy_counts_destroys_next_to_forget_clause() {
        let check = [Expectation::no_destroy("destroys proposed")];
        let plan = PlanOutput::new("Plan: 0 to add, 0 to change, 2 to destroy, 1 to forget.\n");
        assert!(!check_all(&plan, &check).is_success());
    }

    #[test]
    fn no_destroy_fails_on_unparsable_summary() {
        let check = [Expectation::no_destroy("destroys proposed")];
        let plan = PlanOutput::new("Plan: 0 to add, 3 to destroy, 1 to relocate.\n");
        assert!(!check_all(&plan, &check).is_success());
    }

    #[test]
    fn eks_set_checks_cluster_outputs_and_summary() {
        let needles: Vec<String> = eks_expectations()
            .into_iter()
            .filter_map(|check| match check {
                Expectation::Contains {
                    needle, ..
                } => Some(needle),
                Expectation::NoDestroy {
                    ..
                } => None,
            })
            .collect();
        assert_eq!(needles, ["eks_cluster", "eks_cluster_name", "eks_cluster_endpoint", "Plan:"]);
    }

    #[test]
    fn report_serializes_with_kind_tags() {
        let checks = [
            Expectation::contains("Plan:", "summary missing"),
            Expectation::no_destroy("destroys proposed"),
        ];
        let report = check_all(&PlanOutput::new("No changes."), &checks);
        let value = serde_json::to_value(&report).expect("serialize report");

        assert_eq!(value["outcomes"][0]["expectation"]["kind"], "contains");
        assert_eq!(value["outcomes"][0]["passed"], false);
        assert_eq!(value["outcomes"][1]["expectation"]["kind"], "no_destroy");
        assert_eq!(value["outcomes"][1]["passed"], true);
    }

    #[test]
    fn empty_expectation_set_passes() {
        assert!(check_all(&PlanOutput::new(""), &[]).is_success());
    }
}
