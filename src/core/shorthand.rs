//! Shorthand entry points over a shared store and an optional fan-out

use super::category::LogCategory;
use super::log_store::LogStore;
use super::payload::LogPayload;
use super::severity::Severity;
use crate::remote::{CallSite, LoggerFanout};
use std::sync::Arc;

/// Cheap, cloneable handle that call sites log through.
///
/// Local output (memory, file, observers, console) follows
/// `cfg!(debug_assertions)` by default: release builds keep only the remote
/// fan-out, so telemetry still ships without local noise.
///
/// # Example
///
/// ```
/// use debug_log_system::prelude::*;
/// use std::sync::Arc;
///
/// let store = Arc::new(LogStore::builder().enabled(true).console_echo(false).build());
/// let log = DebugLog::new(Arc::clone(&store)).with_local_output(true);
///
/// log.warn("cache miss");
/// log.error(vec!["status", "500"]);
/// assert_eq!(store.entry_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DebugLog {
    store: Arc<LogStore>,
    remote: Option<Arc<LoggerFanout>>,
    local_output: bool,
}

impl DebugLog {
    pub fn new(store: Arc<LogStore>) -> Self {
        Self {
            store,
            remote: None,
            local_output: cfg!(debug_assertions),
        }
    }

    #[must_use]
    pub fn with_remote(mut self, remote: Arc<LoggerFanout>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Override the build-profile default for local output
    #[must_use]
    pub fn with_local_output(mut self, local_output: bool) -> Self {
        self.local_output = local_output;
        self
    }

    pub fn store(&self) -> &Arc<LogStore> {
        &self.store
    }

    pub fn remote(&self) -> Option<&Arc<LoggerFanout>> {
        self.remote.as_ref()
    }

    pub fn local_output(&self) -> bool {
        self.local_output
    }

    /// Plain log, category `none`
    pub fn log(&self, payload: impl Into<LogPayload>) {
        self.log_with(payload, LogCategory::None);
    }

    pub fn log_with(&self, payload: impl Into<LogPayload>, category: LogCategory) {
        if self.local_output {
            self.store.log(payload, category);
        }
    }

    pub fn warn(&self, payload: impl Into<LogPayload>) {
        self.log_with(payload, LogCategory::Warning);
    }

    pub fn error(&self, payload: impl Into<LogPayload>) {
        self.log_with(payload, LogCategory::Error);
    }

    /// Log locally with category `none` and forward to the remote fan-out.
    ///
    /// Forwarding happens regardless of local output. Backend failures are
    /// reported on stderr; they never reach the caller.
    #[track_caller]
    pub fn log_remote(&self, message: impl Into<String>, severity: Severity) {
        let site = CallSite::caller();
        self.log_remote_at(message, severity, site);
    }

    pub fn log_remote_at(&self, message: impl Into<String>, severity: Severity, site: CallSite) {
        let message = message.into();
        if self.local_output {
            self.store.log(message.as_str(), LogCategory::None);
        }
        if let Some(remote) = &self.remote {
            if let Err(e) = remote.log_at(message, severity, site) {
                eprintln!("[LOGGER ERROR] Remote fan-out failed: {}", e);
            }
        }
    }
}
