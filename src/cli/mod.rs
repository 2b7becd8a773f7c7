pub mod commands;
pub mod progress;
pub mod prompt;
pub mod ui;

pub use progress::SpinnerReporter;
pub use ui::Output;
