// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for plan harness system-tests.
// Purpose: Provide artifact reporting and tool resolution.
// Dependencies: system-tests, plan-harness
// ============================================================================

//! ## Overview
//! Shared helpers for plan harness system-tests.
//! Invariants:
//! - Each scenario runs the tool in its own staged directory.
//! - Scenarios record a `skip` summary when the tool is unavailable.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod tool;
