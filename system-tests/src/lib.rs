// system-tests/src/lib.rs
// ============================================================================
// Module: Plan Harness System Tests Library
// Description: Shared fixtures for end-to-end plan harness scenarios.
// Purpose: Locate and stage definitions for each scenario.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts fixtures used by the plan harness system-test binaries in
//! `system-tests/tests`. Those binaries run the real provisioning tool and are
//! gated behind the `system-tests` feature.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod fixtures;
