//! Logging macros for ergonomic message formatting.
//!
//! These mirror the [`DebugLog`](crate::DebugLog) shorthands and accept
//! `format!`-style arguments.
//!
//! # Examples
//!
//! ```
//! use debug_log_system::prelude::*;
//! use debug_log_system::{dlog, elog, wlog};
//! use std::sync::Arc;
//!
//! let store = Arc::new(LogStore::builder().enabled(true).console_echo(false).build());
//! let log = DebugLog::new(store).with_local_output(true);
//!
//! dlog!(log, "Server started");
//! dlog!(log, LogCategory::Request; "GET {}", "/orders");
//! wlog!(log, "Retry {} of {}", 1, 3);
//! elog!(log, "Status {}", 500);
//! ```

/// Log with category `none`, or with an explicit category before `;`.
///
/// # Examples
///
/// ```
/// # use debug_log_system::prelude::*;
/// # let log = DebugLog::new(std::sync::Arc::new(LogStore::new()));
/// use debug_log_system::dlog;
/// dlog!(log, "Simple message");
/// dlog!(log, LogCategory::Success; "Saved {} items", 3);
/// ```
#[macro_export]
macro_rules! dlog {
    ($log:expr, $category:expr; $($arg:tt)+) => {
        $log.log_with(format!($($arg)+), $category)
    };
    ($log:expr, $($arg:tt)+) => {
        $log.log(format!($($arg)+))
    };
}

/// Log a warning.
#[macro_export]
macro_rules! wlog {
    ($log:expr, $($arg:tt)+) => {
        $log.warn(format!($($arg)+))
    };
}

/// Log an error.
#[macro_export]
macro_rules! elog {
    ($log:expr, $($arg:tt)+) => {
        $log.error(format!($($arg)+))
    };
}

/// Relay a message through a [`LoggerFanout`](crate::remote::LoggerFanout),
/// capturing file, line and module path of the call site.
///
/// Evaluates to the fan-out's `Result`.
///
/// # Examples
///
/// ```
/// # use debug_log_system::prelude::*;
/// use debug_log_system::remote_log;
/// let fanout = LoggerFanout::default();
/// remote_log!(fanout, "checkout finished").unwrap();
/// remote_log!(fanout, Severity::Critical; "payment failed: {}", "card declined").unwrap();
/// ```
#[macro_export]
macro_rules! remote_log {
    ($fanout:expr, $severity:expr; $($arg:tt)+) => {
        $fanout.log_at(
            format!($($arg)+),
            $severity,
            $crate::remote::CallSite::new(file!(), module_path!(), line!()),
        )
    };
    ($fanout:expr, $($arg:tt)+) => {
        $crate::remote_log!($fanout, $crate::Severity::Debug; $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogCategory, LogStore, Severity};
    use crate::remote::LoggerFanout;
    use crate::DebugLog;
    use std::sync::Arc;

    fn handle() -> (Arc<LogStore>, DebugLog) {
        let store = Arc::new(LogStore::builder().enabled(true).console_echo(false).build());
        let log = DebugLog::new(Arc::clone(&store)).with_local_output(true);
        (store, log)
    }

    #[test]
    fn test_dlog_macro() {
        let (store, log) = handle();
        dlog!(log, "Test message");
        dlog!(log, "Formatted: {}", 42);
        dlog!(log, LogCategory::Start; "Booting {}", "v2");
        let entries = store.entries();
        assert_eq!(entries.len(), 3);
        assert!(entries[1].ends_with("Formatted: 42"));
        assert!(entries[2].starts_with("🚀 "));
    }

    #[test]
    fn test_wlog_elog_macros() {
        let (store, log) = handle();
        wlog!(log, "Retry {} of {}", 1, 3);
        elog!(log, "Code: {}", 500);
        let entries = store.entries();
        assert!(entries[0].starts_with("⚠️ "));
        assert!(entries[1].starts_with("⛔️ "));
    }

    #[test]
    fn test_remote_log_macro() {
        let fanout = LoggerFanout::default();
        assert!(remote_log!(fanout, "plain").is_ok());
        assert!(remote_log!(fanout, Severity::Critical; "code {}", 7).is_ok());
    }
}
