//! Fan-out of one log call to many backends

use super::backend::{CallSite, LogRecord, RemoteBackend};
use crate::core::{BackendFailure, LoggerError, Result, Severity};
use std::sync::atomic::{AtomicU64, Ordering};

/// Ordered, fixed set of remote backends.
///
/// Every call reaches every backend in registration order. A backend that
/// returns an error or panics does not stop the others; all failures are
/// collected into a single [`LoggerError::Backends`].
pub struct LoggerFanout {
    backends: Vec<Box<dyn RemoteBackend>>,
    records_sent: AtomicU64,
    backend_failures: AtomicU64,
}

impl LoggerFanout {
    pub fn new(backends: Vec<Box<dyn RemoteBackend>>) -> Self {
        Self {
            backends,
            records_sent: AtomicU64::new(0),
            backend_failures: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn builder() -> LoggerFanoutBuilder {
        LoggerFanoutBuilder::new()
    }

    /// Relay `message`, capturing the caller's file and line
    #[track_caller]
    pub fn log(&self, message: impl Into<String>, severity: Severity) -> Result<()> {
        self.log_at(message, severity, CallSite::caller())
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log_at(message, Severity::Debug, CallSite::caller())
    }

    #[track_caller]
    pub fn critical(&self, message: impl Into<String>) -> Result<()> {
        self.log_at(message, Severity::Critical, CallSite::caller())
    }

    /// Relay `message` with explicit call-site metadata
    pub fn log_at(
        &self,
        message: impl Into<String>,
        severity: Severity,
        call_site: CallSite,
    ) -> Result<()> {
        let record = LogRecord {
            message: message.into(),
            severity,
            call_site,
        };
        self.dispatch(&record)
    }

    /// Hand `record` to every backend, isolating errors and panics
    pub fn dispatch(&self, record: &LogRecord) -> Result<()> {
        if self.backends.is_empty() {
            return Ok(());
        }
        self.records_sent.fetch_add(1, Ordering::Relaxed);

        let mut failures = Vec::new();
        for (index, backend) in self.backends.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                backend.log(record)
            }));

            let failure = match result {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => (e.to_string(), false),
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    (panic_msg, true)
                }
            };

            failures.push(BackendFailure {
                index,
                backend: backend.name().to_string(),
                error: failure.0,
                panicked: failure.1,
            });
        }

        if failures.is_empty() {
            Ok(())
        } else {
            self.backend_failures
                .fetch_add(failures.len() as u64, Ordering::Relaxed);
            Err(LoggerError::backends(self.backends.len(), failures))
        }
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    pub fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Number of records dispatched to at least one backend
    pub fn records_sent(&self) -> u64 {
        self.records_sent.load(Ordering::Relaxed)
    }

    /// Total individual backend failures so far
    pub fn backend_failures(&self) -> u64 {
        self.backend_failures.load(Ordering::Relaxed)
    }
}

impl Default for LoggerFanout {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl std::fmt::Debug for LoggerFanout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerFanout")
            .field("backends", &self.backend_names())
            .finish()
    }
}

/// Builder collecting backends before the set is frozen
pub struct LoggerFanoutBuilder {
    backends: Vec<Box<dyn RemoteBackend>>,
}

impl LoggerFanoutBuilder {
    pub fn new() -> Self {
        Self {
            backends: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn backend<B: RemoteBackend + 'static>(mut self, backend: B) -> Self {
        self.backends.push(Box::new(backend));
        self
    }

    pub fn build(self) -> LoggerFanout {
        LoggerFanout::new(self.backends)
    }
}

impl Default for LoggerFanoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}
