// system-tests/src/fixtures.rs
// ============================================================================
// Module: EKS Fixtures
// Description: Definition location and staging.
// Purpose: Give each scenario its own copy of the EKS definition.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Scenarios never run the tool inside the source tree. The definition is
//! copied into a per-test directory first, so parallel scenarios never share
//! the tool's local cache or state files.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

/// Definition directory relative to the workspace root.
pub const EKS_DEFINITION_DIR: &str = "infra/eks";

/// File extension of definition files copied by [`stage_definition`].
const DEFINITION_EXTENSION: &str = "tf";

/// Returns the EKS definition directory inside this workspace.
#[must_use]
pub fn eks_definition_dir() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap_or(manifest_dir).join(EKS_DEFINITION_DIR)
}

/// Copies the top-level definition files of `source` into `dest`.
///
/// Returns the copied file names in sorted order. Subdirectories (including a
/// previous run's `.terraform` cache) are not copied.
///
/// # Errors
///
/// Returns an IO error when `source` cannot be listed, contains no
/// definition files, or a copy fails.
pub fn stage_definition(source: &Path, dest: &Path) -> io::Result<Vec<String>> {
    fs::create_dir_all(dest)?;
    let mut copied = Vec::new();
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let path = entry.path();
        let is_definition = path.extension().is_some_and(|ext| ext == DEFINITION_EXTENSION);
        if !entry.file_type()?.is_file() || !is_definition {
            continue;
        }
        fs::copy(&path, dest.join(entry.file_name()))?;
        copied.push(entry.file_name().to_string_lossy().into_owned());
    }
    if copied.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no .{DEFINITION_EXTENSION} files in {}", source.display()),
        ));
    }
    copied.sort();
    Ok(copied)
}
