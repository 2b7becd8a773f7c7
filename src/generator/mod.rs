//! Project Generation Pipeline
//!
//! Orchestrates four strictly sequential phases: clone, clean,
//! patch-package-manifest, patch-extension-manifest. The clean phase fans
//! out its removals concurrently and joins them before the patch steps run.
//!
//! Failure containment: the first failing phase stops the pipeline and the
//! error is returned to the caller; partial directory state is left on disk
//! (no rollback). Pre-flight validation lives in [`validate`] and must have
//! run before [`ProjectGenerator::generate`] is called.

pub mod clone;
pub mod install;
pub mod manifest;
pub mod reporter;
pub mod validate;

pub use clone::{GitClone, TemplateSource};
pub use install::{CommandRunner, ProcessRunner, install_dependencies};
pub use reporter::{ProgressReporter, SilentReporter};
pub use validate::{validate_features, validate_name};

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{BoxFuture, try_join_all};
use tracing::debug;

use crate::constants::template;
use crate::types::{Feature, ForgeError, Result, ToolMetadata};

pub struct ProjectGenerator {
    source: Arc<dyn TemplateSource>,
    reporter: Arc<dyn ProgressReporter>,
    metadata: ToolMetadata,
}

impl ProjectGenerator {
    pub fn new(
        source: Arc<dyn TemplateSource>,
        reporter: Arc<dyn ProgressReporter>,
        metadata: ToolMetadata,
    ) -> Self {
        Self {
            source,
            reporter,
            metadata,
        }
    }

    /// Generate a project under the current working directory.
    ///
    /// Returns the target directory so the caller can hand it to the
    /// dependency installer.
    pub async fn generate(&self, project_name: &str, features: &[Feature]) -> Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        self.generate_at(&cwd, project_name, features).await
    }

    /// Generate a project under an explicit parent directory (testable seam)
    pub async fn generate_at(
        &self,
        cwd: &Path,
        project_name: &str,
        features: &[Feature],
    ) -> Result<PathBuf> {
        let target_dir = cwd.join(project_name);
        let remote = self.metadata.template_url()?;

        debug!(
            "Generating '{}' with features {:?} in {}",
            project_name,
            features,
            target_dir.display()
        );

        self.step(
            "Cloning template repository",
            "Template cloned",
            self.source.as_ref().clone_into(remote.as_str(), &target_dir),
        )
        .await?;

        self.step(
            "Cleaning template artifacts",
            "Template artifacts removed",
            clean_template(&target_dir),
        )
        .await?;

        self.step(
            "Rewriting package.json",
            "package.json rewritten",
            self.patch_package_json(&target_dir, project_name),
        )
        .await?;

        self.step(
            "Rewriting extension manifest",
            "Extension manifest rewritten",
            self.patch_extension_manifest(&target_dir, project_name, features),
        )
        .await?;

        Ok(target_dir)
    }

    /// Run one phase under the progress reporter
    async fn step<F>(&self, started: &str, done: &str, phase: F) -> Result<()>
    where
        F: Future<Output = Result<()>>,
    {
        self.reporter.step_started(started);
        match phase.await {
            Ok(()) => {
                self.reporter.step_done(done);
                Ok(())
            }
            Err(e) => {
                self.reporter.step_failed(&e.to_string());
                Err(e)
            }
        }
    }

    async fn patch_package_json(&self, target_dir: &Path, project_name: &str) -> Result<()> {
        let path = target_dir.join(template::PACKAGE_JSON);
        let package = manifest::read_json(&path).await?;
        let patched = manifest::patch_package(package, project_name, &self.metadata.generated_by());
        manifest::write_json_pretty(&path, &patched).await
    }

    async fn patch_extension_manifest(
        &self,
        target_dir: &Path,
        project_name: &str,
        features: &[Feature],
    ) -> Result<()> {
        let path = target_dir.join(template::MANIFEST_SUBPATH);
        let original = manifest::read_json(&path).await?;
        let patched = manifest::patch_extension_manifest(
            original,
            project_name,
            &self.metadata.generated_by(),
            features,
        );
        manifest::write_json_pretty(&path, &patched).await
    }
}

/// Remove template-only directories and files from the cloned tree.
///
/// Removals are issued concurrently and jointly awaited (one barrier step).
/// Already-absent targets are success; any other failure aborts with a
/// cleanup error naming the path.
async fn clean_template(target_dir: &Path) -> Result<()> {
    let mut removals: Vec<BoxFuture<'_, Result<()>>> = Vec::new();
    for dir in template::CLEAN_DIRS {
        removals.push(remove_dir(target_dir.join(dir)).boxed());
    }
    for file in template::CLEAN_FILES {
        removals.push(remove_file(target_dir.join(file)).boxed());
    }
    try_join_all(removals).await?;
    Ok(())
}

async fn remove_dir(path: PathBuf) -> Result<()> {
    match tokio::fs::remove_dir_all(&path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ForgeError::Cleanup(format!("{}: {}", path.display(), e))),
    }
}

async fn remove_file(path: PathBuf) -> Result<()> {
    match tokio::fs::remove_file(&path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ForgeError::Cleanup(format!("{}: {}", path.display(), e))),
    }
}
