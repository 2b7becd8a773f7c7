use console::style;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    /// Dimmed follow-up line under a success/info message
    pub fn hint(&self, message: &str) {
        println!("  {}", style(message).dim());
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
