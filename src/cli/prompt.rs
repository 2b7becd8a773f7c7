//! Interactive Prompts
//!
//! dialoguer-backed prompts used when the `new` command is invoked without a
//! name or feature flags. The name input validates the allowed pattern
//! inline; directory uniqueness is re-checked by the pre-flight validator
//! afterwards.

use dialoguer::{Input, MultiSelect, theme::ColorfulTheme};

use crate::generator::validate::is_valid_name;
use crate::types::{Feature, ForgeError, Result};

fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Prompt for a project name with inline pattern validation
pub fn project_name() -> Result<String> {
    let name: String = Input::with_theme(&theme())
        .with_prompt("Project name")
        .validate_with(|input: &String| {
            if is_valid_name(input) {
                Ok(())
            } else {
                Err("only lowercase letters, digits, '-' and '_' are allowed")
            }
        })
        .interact_text()
        .map_err(io_error)?;
    Ok(name)
}

/// Prompt for feature selection (multi-select over all features)
pub fn features() -> Result<Vec<Feature>> {
    let labels: Vec<&str> = Feature::ALL.iter().map(Feature::label).collect();
    let indices = MultiSelect::with_theme(&theme())
        .with_prompt("Select features (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()
        .map_err(io_error)?;

    Ok(indices.into_iter().map(|i| Feature::ALL[i]).collect())
}

fn io_error(e: dialoguer::Error) -> ForgeError {
    let dialoguer::Error::IO(io) = e;
    ForgeError::Io(io)
}
