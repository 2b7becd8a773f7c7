pub mod error;
pub mod feature;
pub mod metadata;

pub use error::{ForgeError, Result};
pub use feature::Feature;
pub use metadata::ToolMetadata;
