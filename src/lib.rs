//! extforge - Browser-Extension Project Scaffolding
//!
//! Clones a fixed template repository, strips template-only artifacts, and
//! rewrites the package and extension manifests for a named project with a
//! selected set of extension features.
//!
//! ## Pipeline
//!
//! 1. **Validate**: project name pattern + directory uniqueness, non-empty
//!    feature set (the only failures that exit non-zero)
//! 2. **Clone**: fixed template repository into `<cwd>/<name>`
//! 3. **Clean**: strip `.git/`, `cli/`, `README.md` (concurrent removals,
//!    jointly awaited)
//! 4. **Patch**: overlay project identity onto `package.json` and the
//!    extension manifest, gating `browser_action`, `options_page` and
//!    `chrome_url_overrides` on the selected features
//! 5. **Install**: `npm ci` inside the generated project
//!
//! ## Modules
//!
//! - [`generator`]: the pipeline, validators, and external collaborators
//! - [`cli`]: command orchestration, prompts, spinner, styled output
//! - [`types`]: unified error type, feature enum, tool metadata

pub mod cli;
pub mod constants;
pub mod generator;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use generator::{
    GitClone, ProcessRunner, ProgressReporter, ProjectGenerator, SilentReporter, TemplateSource,
    install_dependencies, validate_features, validate_name,
};
pub use types::{Feature, ForgeError, Result, ToolMetadata};
