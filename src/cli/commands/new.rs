//! New Command
//!
//! Scaffold a browser-extension project: gather inputs (flags or prompts),
//! run the pre-flight validators, then generate and install.
//!
//! Termination contract: validator failures propagate to `main` and exit 1.
//! Generation/install failures are logged here as a single error line and
//! swallowed; whatever partial directory state exists stays on disk and the
//! process exits 0.

use std::sync::Arc;

use crate::cli::{Output, SpinnerReporter, prompt};
use crate::generator::{
    GitClone, ProcessRunner, ProgressReporter, ProjectGenerator, SilentReporter,
    install_dependencies, validate_features, validate_name,
};
use crate::types::{Feature, Result, ToolMetadata};

pub struct NewOptions {
    /// Project name; prompted for when absent
    pub name: Option<String>,
    /// Selected features; prompted for when empty
    pub features: Vec<Feature>,
    /// Skip the `npm ci` step after generation
    pub skip_install: bool,
    /// Suppress spinner rendering
    pub quiet: bool,
}

pub async fn run(opts: NewOptions) -> Result<()> {
    let out = Output::new();
    let metadata = ToolMetadata::from_build_env();
    let cwd = std::env::current_dir()?;

    let name = match opts.name {
        Some(name) => name,
        None => prompt::project_name()?,
    };
    validate_name(&name, &cwd)?;

    let features = if opts.features.is_empty() {
        prompt::features()?
    } else {
        opts.features
    };
    validate_features(&features)?;

    let reporter: Arc<dyn ProgressReporter> = if opts.quiet {
        Arc::new(SilentReporter)
    } else {
        Arc::new(SpinnerReporter::new())
    };

    let generator = ProjectGenerator::new(Arc::new(GitClone), Arc::clone(&reporter), metadata);
    let target_dir = match generator.generate(&name, &features).await {
        Ok(dir) => dir,
        Err(e) => {
            // partial state stays on disk; no rollback
            out.error(&e.to_string());
            return Ok(());
        }
    };

    if opts.skip_install {
        out.info("Skipping dependency install");
    } else {
        reporter.step_started("Installing dependencies (npm ci)");
        match install_dependencies(&ProcessRunner, &target_dir).await {
            Ok(()) => reporter.step_done("Dependencies installed"),
            Err(e) => {
                reporter.step_failed(&e.to_string());
                out.error(&e.to_string());
                return Ok(());
            }
        }
    }

    out.success(&format!("Project '{name}' is ready"));
    out.hint(&format!("cd {name}"));
    out.hint("npm start");
    Ok(())
}
