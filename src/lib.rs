//! # Debug Log System
//!
//! Category-tagged debug logging for applications.
//!
//! ## Features
//!
//! - **Emoji categories**: every line carries a visual prefix (`🚀`, `⚠️`, `⛔️`, ...)
//! - **One sink**: in-memory history, a per-run log file and console echo
//! - **Observers**: synchronous callbacks or channels for in-app log viewers
//! - **Export**: package log files for mailing and clean them up afterwards
//! - **Remote fan-out**: forward messages to any number of logger backends

pub mod appenders;
pub mod core;
pub mod export;
pub mod macros;
pub mod remote;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryAppender};
    pub use crate::core::{
        Appender, BackendError, Clock, DebugLog, FixedClock, InMemoryPreferences,
        JsonPreferences, LogAdded, LogCategory, LogEntry, LogPayload, LogStore, LogStoreBuilder,
        LogStoreConfig, LoggerError, Preferences, Result, Severity, StoreMetrics, SystemClock,
        TimestampFormat, DEBUG_LOG_KEY,
    };
    pub use crate::export::{ExportSelection, LogExporter, MailSettings};
    pub use crate::remote::{CallSite, LogRecord, LoggerFanout, RemoteBackend};
}

pub use appenders::{ConsoleAppender, MemoryAppender};
pub use core::{
    Appender, BackendError, Clock, DebugLog, FixedClock, InMemoryPreferences, JsonPreferences,
    LogAdded, LogCategory, LogEntry, LogPayload, LogStore, LogStoreBuilder, LogStoreConfig,
    LoggerError, Preferences, Result, Severity, StoreMetrics, SystemClock, TimestampFormat,
    DEBUG_LOG_KEY,
};
pub use remote::{CallSite, LogRecord, LoggerFanout, RemoteBackend};
