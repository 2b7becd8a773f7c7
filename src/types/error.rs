//! Unified Error Type System
//!
//! Single error type (ForgeError) for the entire application, split into two
//! classes with different termination contracts:
//!
//! - **Usage errors** (invalid name, existing directory, empty feature set):
//!   pre-flight failures, nothing on disk yet. The CLI maps these to exit
//!   status 1.
//! - **Runtime errors** (clone, clean, manifest rewrite, install): caught at
//!   the command boundary, logged once, and swallowed. Whatever partial
//!   directory state exists is left in place; no rollback, no retry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForgeError {
    // -------------------------------------------------------------------------
    // Usage Errors (pre-flight, exit 1)
    // -------------------------------------------------------------------------
    #[error(
        "invalid project name '{name}': only lowercase letters, digits, '-' and '_' are allowed"
    )]
    InvalidName { name: String },

    #[error("directory '{name}' already exists in the current directory")]
    AlreadyExists { name: String },

    #[error("no features selected: pick at least one of popup, options, tab")]
    NoFeaturesSelected,

    // -------------------------------------------------------------------------
    // Runtime Errors (logged and swallowed at the command boundary)
    // -------------------------------------------------------------------------
    #[error("failed to clone template from {url}: {reason}")]
    Clone { url: String, reason: String },

    #[error("failed to clean template artifacts: {0}")]
    Cleanup(String),

    #[error("failed to rewrite {path}: {reason}")]
    ManifestWrite { path: String, reason: String },

    #[error("parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("dependency install failed: {0}")]
    Install(String),

    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ForgeError>;

impl ForgeError {
    /// Create a clone error with remote context
    pub fn clone_failed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Clone {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a manifest write error with path context
    pub fn manifest_write(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ManifestWrite {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a parse error with path context
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this is a pre-flight usage error (maps to exit status 1)
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::InvalidName { .. } | Self::AlreadyExists { .. } | Self::NoFeaturesSelected
        )
    }
}
