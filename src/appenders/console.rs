//! Console echo appender

use crate::core::{Appender, LogEntry, Result};
#[cfg(feature = "console")]
use colored::Colorize;

/// Echoes each entry's formatted text to stdout, one line per entry
pub struct ConsoleAppender {
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self { use_colors: false }
    }

    /// Colorize warning, error, success and network lines when the
    /// `console` feature is enabled
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn render(&self, entry: &LogEntry) -> String {
        #[cfg(feature = "console")]
        if self.use_colors {
            if let Some(color) = entry.category().color_code() {
                return entry.text().color(color).to_string();
            }
        }
        entry.text().to_string()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        println!("{}", self.render(entry));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
