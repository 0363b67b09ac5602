//! Log entry structure

use super::category::LogCategory;
use super::payload::LogPayload;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Indentation applied after every embedded newline
pub const CONTINUATION_INDENT: &str = "   ";

/// One formatted log line.
///
/// The text is rendered once in [`LogEntry::new`] and never changes; it is
/// the unit kept in memory, written to file and broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    category: LogCategory,
    timestamp: DateTime<Local>,
    text: String,
}

impl LogEntry {
    pub fn new(
        category: LogCategory,
        payload: &LogPayload,
        timestamp: DateTime<Local>,
        format: &TimestampFormat,
    ) -> Self {
        let text = Self::render(category, &format.format(&timestamp), payload);
        Self {
            category,
            timestamp,
            text,
        }
    }

    /// `prefix + timestamp + " " + flattened payload`, with continuation
    /// lines re-indented so they stay grouped under the entry
    pub fn render(category: LogCategory, timestamp: &str, payload: &LogPayload) -> String {
        let mut text = String::with_capacity(category.prefix().len() + timestamp.len() + 16);
        text.push_str(category.prefix());
        text.push_str(timestamp);
        text.push(' ');
        text.push_str(&payload.flatten());
        text.replace('\n', &format!("\n{}", CONTINUATION_INDENT))
    }

    pub fn category(&self) -> LogCategory {
        self.category
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
