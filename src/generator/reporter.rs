//! Progress Reporting Capability
//!
//! The generator reports phase transitions through this trait instead of
//! printing directly, keeping terminal rendering out of the library. The CLI
//! wires in a spinner renderer; tests and `--quiet` use [`SilentReporter`].

/// Phase-level progress sink for the generation pipeline
pub trait ProgressReporter: Send + Sync {
    /// A phase started (spinner begins)
    fn step_started(&self, message: &str);

    /// The current phase finished successfully
    fn step_done(&self, message: &str);

    /// The current phase failed (spinner is cancelled, one error line)
    fn step_failed(&self, message: &str);
}

/// Reporter that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn step_started(&self, _message: &str) {}
    fn step_done(&self, _message: &str) {}
    fn step_failed(&self, _message: &str) {}
}
