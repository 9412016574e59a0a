// crates/plan-harness/src/logging.rs
// ============================================================================
// Module: Logging
// Description: Tracing subscriber setup for harness runs.
// Purpose: Route step events into the test runner's captured output.
// Dependencies: tracing, tracing-subscriber
// ============================================================================

//! ## Overview
//! [`init`] installs a global `fmt` subscriber once per process. It honors
//! `RUST_LOG` and otherwise logs this crate at `info`. Later calls are no-ops,
//! so every test may call it unconditionally.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "plan_harness=info";

/// Installs the global subscriber if none is set yet.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
