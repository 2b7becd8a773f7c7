//! Dependency Install Step
//!
//! Runs the package manager's clean install inside the generated project as
//! a child process. The child gets `cwd = target_dir`; the host process never
//! changes its own working directory. Failure is an [`ForgeError::Install`]
//! for the caller to log; it must never crash the host.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::constants::install;
use crate::types::{ForgeError, Result};

/// Child-process runner collaborator
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()>;
}

/// Production runner over `tokio::process`
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        debug!("Running {} {} in {}", program, args.join(" "), cwd.display());

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| ForgeError::Install(format!("failed to spawn {program}: {e}")))?;

        if !status.success() {
            return Err(ForgeError::Install(format!(
                "{program} exited with status {}",
                status.code().map_or_else(|| "signal".into(), |c| c.to_string())
            )));
        }

        Ok(())
    }
}

/// Run the package manager clean install inside `target_dir`
pub async fn install_dependencies(runner: &dyn CommandRunner, target_dir: &Path) -> Result<()> {
    runner.run(install::PROGRAM, install::ARGS, target_dir).await
}
