//! Pre-Flight Validators
//!
//! Both validators run before any side effect; their failures are the only
//! errors that terminate the process with a non-zero status. The existence
//! check is point-in-time with no lock (accepted time-of-check/time-of-use
//! gap).

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Feature, ForgeError, Result};

/// Allowed project-name alphabet: lowercase letters, digits, hyphen, underscore
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-_]+$").expect("valid name pattern"));

/// Validate a project name against the allowed pattern and directory
/// uniqueness under `cwd`.
pub fn validate_name(name: &str, cwd: &Path) -> Result<()> {
    if !NAME_PATTERN.is_match(name) {
        return Err(ForgeError::InvalidName { name: name.into() });
    }
    if cwd.join(name).exists() {
        return Err(ForgeError::AlreadyExists { name: name.into() });
    }
    Ok(())
}

/// Pattern-only check, shared with the interactive prompt (which cannot
/// reasonably re-check existence on every keystroke).
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Validate that at least one feature was selected.
///
/// Order and duplicates are immaterial; only emptiness is rejected.
pub fn validate_features(features: &[Feature]) -> Result<()> {
    if features.is_empty() {
        return Err(ForgeError::NoFeaturesSelected);
    }
    Ok(())
}
