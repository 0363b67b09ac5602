//! Backend trait and the record relayed to it

use crate::core::{BackendError, Severity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::Location;

/// Where a log call was made
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    pub file: String,
    /// Enclosing function or module path; empty when not captured
    pub function: String,
    pub line: u32,
}

impl CallSite {
    pub fn new(file: impl Into<String>, function: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            function: function.into(),
            line,
        }
    }

    /// File and line of the caller of the `#[track_caller]` chain
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file().to_string(),
            function: String::new(),
            line: location.line(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.function.is_empty() {
            write!(f, "{}:{}", self.file, self.line)
        } else {
            write!(f, "{}:{} ({})", self.file, self.line, self.function)
        }
    }
}

/// One remote log call, relayed unchanged to every backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub message: String,
    pub severity: Severity,
    pub call_site: CallSite,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} - {}", self.severity, self.call_site, self.message)
    }
}

/// A logger implementation the fan-out forwards to.
///
/// # Example
///
/// ```
/// use debug_log_system::core::BackendError;
/// use debug_log_system::remote::{LogRecord, RemoteBackend};
///
/// struct StderrBackend;
///
/// impl RemoteBackend for StderrBackend {
///     fn name(&self) -> &str {
///         "stderr"
///     }
///
///     fn log(&self, record: &LogRecord) -> Result<(), BackendError> {
///         eprintln!("{}", record);
///         Ok(())
///     }
/// }
/// ```
pub trait RemoteBackend: Send + Sync {
    fn name(&self) -> &str;

    fn log(&self, record: &LogRecord) -> Result<(), BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_captures_this_file() {
        let site = CallSite::caller();
        assert!(site.file.ends_with("backend.rs"));
        assert!(site.line > 0);
        assert!(site.function.is_empty());
    }

    #[test]
    fn test_record_display() {
        let record = LogRecord {
            message: "payment failed".to_string(),
            severity: Severity::Critical,
            call_site: CallSite::new("src/pay.rs", "pay::charge", 42),
        };
        assert_eq!(
            record.to_string(),
            "[CRITICAL] src/pay.rs:42 (pay::charge) - payment failed"
        );
    }
}
