//! Global Constants
//!
//! Fixed layout of the upstream template repository and the install command.
//! The paths here are a contract with the template, not tunables.

/// Template repository layout
pub mod template {
    /// Package manifest at the template root
    pub const PACKAGE_JSON: &str = "package.json";

    /// Extension manifest, fixed by the template's known structure
    pub const MANIFEST_SUBPATH: &str = "angular/src/manifest.json";

    /// Directories stripped by the clean phase (version-control metadata
    /// and the CLI sources that live alongside the template upstream)
    pub const CLEAN_DIRS: &[&str] = &[".git", "cli"];

    /// Files stripped by the clean phase
    pub const CLEAN_FILES: &[&str] = &["README.md"];
}

/// Dependency install step
pub mod install {
    /// Package manager binary
    pub const PROGRAM: &str = "npm";

    /// Clean-install arguments
    pub const ARGS: &[&str] = &["ci"];
}
