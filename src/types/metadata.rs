//! Tool metadata
//!
//! The tool's own package descriptor, read once at startup from the build
//! environment. The repository URL doubles as the template clone source: the
//! upstream repo hosts both the extension template and this CLI, which is why
//! the clean phase strips the `cli/` subdirectory from generated projects.

use crate::types::{ForgeError, Result};

/// Static tool metadata (name + template repository URL)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolMetadata {
    pub name: String,
    pub repository_url: String,
}

impl ToolMetadata {
    pub fn new(name: impl Into<String>, repository_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repository_url: repository_url.into(),
        }
    }

    /// Read metadata from the build environment (Cargo package fields)
    pub fn from_build_env() -> Self {
        Self::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_REPOSITORY"))
    }

    /// Attribution string written into generated manifests
    pub fn generated_by(&self) -> String {
        format!("Generated with {}", self.name)
    }

    /// Validated template remote, rejected before anything is spawned
    pub fn template_url(&self) -> Result<url::Url> {
        url::Url::parse(&self.repository_url)
            .map_err(|e| ForgeError::clone_failed(&self.repository_url, e.to_string()))
    }
}
