//! Template Source
//!
//! Version-control clone collaborator: a single `clone_into(url, dest)`
//! operation. The destination must not previously exist or must be empty;
//! on failure no cleanup is attempted and partial state stays on disk.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::types::{ForgeError, Result};

/// Collaborator that materializes the template into a destination directory
#[async_trait]
pub trait TemplateSource: Send + Sync {
    async fn clone_into(&self, remote_url: &str, dest: &Path) -> Result<()>;
}

/// Production source: spawns `git clone <url> <dest>`
#[derive(Debug, Default, Clone, Copy)]
pub struct GitClone;

#[async_trait]
impl TemplateSource for GitClone {
    async fn clone_into(&self, remote_url: &str, dest: &Path) -> Result<()> {
        // Reject malformed remotes before spawning anything
        url::Url::parse(remote_url)
            .map_err(|e| ForgeError::clone_failed(remote_url, e.to_string()))?;

        debug!("Cloning {} into {}", remote_url, dest.display());

        let output = Command::new("git")
            .arg("clone")
            .arg(remote_url)
            .arg(dest)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                ForgeError::clone_failed(remote_url, format!("failed to spawn git: {e}"))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = if stderr.trim().is_empty() {
                "git exited with non-zero status".to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(ForgeError::clone_failed(remote_url, reason));
        }

        Ok(())
    }
}
