//! Spinner Progress Rendering
//!
//! indicatif-backed implementation of the generator's [`ProgressReporter`]
//! capability. One spinner per phase: started spins, done freezes to a ✓
//! line, failed clears the spinner so the caller's single error line is the
//! only trace of the step.

use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::generator::ProgressReporter;

pub struct SpinnerReporter {
    current: Mutex<Option<ProgressBar>>,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.cyan} {msg}").expect("valid spinner template")
    }

    fn take_current(&self) -> Option<ProgressBar> {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for SpinnerReporter {
    fn step_started(&self, message: &str) {
        let bar = ProgressBar::new_spinner()
            .with_style(Self::spinner_style())
            .with_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        if let Some(previous) = self.take_current() {
            previous.finish_and_clear();
        }
        *self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(bar);
    }

    fn step_done(&self, message: &str) {
        if let Some(bar) = self.take_current() {
            bar.finish_and_clear();
        }
        println!("{} {}", console::style("✓").green(), message);
    }

    fn step_failed(&self, _message: &str) {
        // The command layer prints the single error line; here the spinner
        // is only cancelled.
        if let Some(bar) = self.take_current() {
            bar.finish_and_clear();
        }
    }
}
