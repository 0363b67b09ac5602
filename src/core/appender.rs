//! Appender trait for echo destinations
//!
//! Appenders receive every entry after it has been stored and broadcast.
//! The console is the default; hosts can add their own (an in-app viewer,
//! a test capture buffer).

use super::{error::Result, log_entry::LogEntry};

pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
