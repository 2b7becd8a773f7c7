//! Optional browser-extension UI surfaces a generated project may expose.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A selectable extension feature.
///
/// Each feature gates one key in the template's `manifest.json`: the key is
/// copied through when the feature is selected and stripped when it is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    /// Browser-action popup (`browser_action`)
    Popup,
    /// Options page (`options_page`)
    Options,
    /// New-tab override (`chrome_url_overrides`)
    Tab,
}

impl Feature {
    pub const ALL: [Feature; 3] = [Feature::Popup, Feature::Options, Feature::Tab];

    /// Manifest key this feature gates
    pub fn manifest_key(&self) -> &'static str {
        match self {
            Self::Popup => "browser_action",
            Self::Options => "options_page",
            Self::Tab => "chrome_url_overrides",
        }
    }

    /// Human-readable label for prompts and summaries
    pub fn label(&self) -> &'static str {
        match self {
            Self::Popup => "popup",
            Self::Options => "options page",
            Self::Tab => "new tab override",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
