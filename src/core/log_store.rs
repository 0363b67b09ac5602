//! The log store: single sink for in-app debug messages

use super::{
    appender::Appender,
    category::LogCategory,
    config::LogStoreConfig,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    metrics::StoreMetrics,
    observer::{LogAdded, LogObserver, ObserverBus, SubscriptionId},
    payload::LogPayload,
    preferences::{InMemoryPreferences, Preferences, DEBUG_LOG_KEY},
    timestamp::{Clock, SystemClock, TimestampFormat},
};
use crate::appenders::{ConsoleAppender, LogFile};
use crossbeam_channel::Receiver;
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lifecycle of the active log file
enum FileState {
    /// Not attempted yet
    Unopened,
    Open(LogFile),
    /// Opening failed or no directory is configured; never retried
    Disabled,
}

struct StoreState {
    entries: Vec<String>,
    file: FileState,
}

/// Collects every debug message of the process.
///
/// A disabled store ignores all `log` calls. When enabled, each call formats
/// one [`LogEntry`], appends it to the in-memory history, writes it to the
/// run's log file (if the `debug_log` preference is set), broadcasts it to
/// observers and echoes it to the appenders. No file-system error ever
/// reaches the caller.
///
/// The store is meant to be created once at the composition root and shared
/// as `Arc<LogStore>`.
pub struct LogStore {
    enabled: AtomicBool,
    state: Mutex<StoreState>,
    observers: ObserverBus,
    appenders: Mutex<Vec<Box<dyn Appender>>>,
    preferences: Arc<dyn Preferences>,
    clock: Arc<dyn Clock>,
    app_name: String,
    timestamp_format: TimestampFormat,
    log_directory: Option<PathBuf>,
    metrics: StoreMetrics,
}

impl LogStore {
    /// Disabled store with console echo and no file logging
    #[must_use]
    pub fn new() -> Self {
        LogStoreBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> LogStoreBuilder {
        LogStoreBuilder::new()
    }

    /// Set the enable gate
    pub fn configure(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Whether the persisted preference currently asks for a log file
    pub fn file_logging_requested(&self) -> bool {
        self.preferences.get_bool(DEBUG_LOG_KEY)
    }

    pub fn log(&self, payload: impl Into<LogPayload>, category: LogCategory) {
        if !self.is_enabled() {
            self.metrics.record_suppressed();
            return;
        }

        let entry = self.make_entry(category, &payload.into());
        let write_file = self.file_logging_requested();

        // Memory and file are updated under one lock so both keep the same
        // order when several threads log at once. Observers run after the
        // lock is released, so they are notified after the file write.
        let notices = {
            let mut state = self.state.lock();
            state.entries.push(entry.text().to_string());
            self.metrics.record_logged();

            let notices = if write_file {
                self.ensure_file(&mut state.file)
            } else {
                Vec::new()
            };
            for notice in &notices {
                state.entries.push(notice.text().to_string());
                self.metrics.record_logged();
            }

            if write_file {
                if let FileState::Open(ref mut file) = state.file {
                    match file.append_line(entry.text()) {
                        Ok(()) => {
                            self.metrics.record_file_write();
                        }
                        Err(e) => {
                            self.metrics.record_file_write_failure();
                            eprintln!("[LOGGER ERROR] Failed to write to log file: {}", e);
                        }
                    }
                }
            }
            notices
        };

        self.publish(&entry);
        for notice in &notices {
            self.publish(notice);
        }
    }

    /// Open the run's file on first use.
    ///
    /// Returns internal notices (success or failure) to be recorded after
    /// the triggering entry. Notices are never written to the file.
    fn ensure_file(&self, file: &mut FileState) -> Vec<LogEntry> {
        if !matches!(file, FileState::Unopened) {
            return Vec::new();
        }

        let Some(directory) = self.log_directory.as_deref() else {
            *file = FileState::Disabled;
            return Vec::new();
        };

        match LogFile::open(directory, &self.app_name, &self.clock.now()) {
            Ok(opened) => {
                let notice = self.make_entry(
                    LogCategory::Success,
                    &format!("Debug log written to {}", opened.path().display()).into(),
                );
                *file = FileState::Open(opened);
                vec![notice]
            }
            Err(e) => {
                *file = FileState::Disabled;
                self.metrics.record_internal_error();
                let message = match &e {
                    LoggerError::DirectoryCreation { path, .. } => {
                        format!("Cannot create log directory at {}", path.display())
                    }
                    LoggerError::FileHandleCreation { path, source } => format!(
                        "Cannot create file handle for writing at {}: {}",
                        path.display(),
                        source
                    ),
                    other => other.to_string(),
                };
                vec![self.make_entry(LogCategory::Error, &message.into())]
            }
        }
    }

    fn make_entry(&self, category: LogCategory, payload: &LogPayload) -> LogEntry {
        LogEntry::new(category, payload, self.clock.now(), &self.timestamp_format)
    }

    /// Broadcast to observers, then echo to appenders.
    ///
    /// Each appender is isolated: an error or panic in one is reported on
    /// stderr and the others still receive the entry.
    fn publish(&self, entry: &LogEntry) {
        self.observers.publish(&LogAdded {
            log: entry.text().to_string(),
        });

        let mut appenders = self.appenders.lock();
        for (idx, appender) in appenders.iter_mut().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append(entry)
            }));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Appender #{} ({}) failed: {}",
                        idx,
                        appender.name(),
                        e
                    );
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} panicked: {}. \
                         Other appenders continue to function.",
                        idx, panic_msg
                    );
                }
            }
        }
    }

    /// Snapshot of every formatted entry, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.state.lock().entries.clone()
    }

    pub fn entry_count(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Contents of the active log file.
    ///
    /// `None` while no file is open; an empty string if reading fails.
    pub fn logs(&self) -> Option<String> {
        let state = self.state.lock();
        match &state.file {
            FileState::Open(file) => Some(file.read_to_string().unwrap_or_default()),
            _ => None,
        }
    }

    pub fn log_directory(&self) -> Option<&Path> {
        self.log_directory.as_deref()
    }

    pub fn active_file_path(&self) -> Option<PathBuf> {
        match &self.state.lock().file {
            FileState::Open(file) => Some(file.path().to_path_buf()),
            _ => None,
        }
    }

    pub fn active_file_name(&self) -> Option<String> {
        match &self.state.lock().file {
            FileState::Open(file) => file.file_name(),
            _ => None,
        }
    }

    /// Names of the files in the log directory, sorted lexicographically.
    ///
    /// File names embed their creation time, so this is also creation
    /// order. Empty when the directory is unset or unreadable.
    pub fn list_all_log_files(&self) -> Vec<String> {
        let Some(directory) = self.log_directory.as_deref() else {
            return Vec::new();
        };
        let Ok(read_dir) = fs::read_dir(directory) else {
            return Vec::new();
        };

        let mut files: Vec<String> = read_dir
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        files.sort();
        files
    }

    /// Raw bytes of a file in the log directory (best effort)
    pub fn read_log_file(&self, name: &str) -> Option<Vec<u8>> {
        let path = self.resolve_log_file(name)?;
        fs::read(path).ok()
    }

    /// Remove the named files from the log directory.
    ///
    /// The active file is never removed. A failure on one file does not stop
    /// the others. Returns how many files were deleted.
    pub fn delete_log_files<S: AsRef<str>>(&self, names: &[S]) -> usize {
        let active = self.active_file_name();
        let mut removed = 0;

        for name in names {
            let name = name.as_ref();
            if active.as_deref() == Some(name) {
                continue;
            }
            let Some(path) = self.resolve_log_file(name) else {
                continue;
            };
            match fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(e) => {
                    let err = LoggerError::file_delete(&path, e);
                    eprintln!("[LOGGER WARNING] {}", err);
                }
            }
        }
        removed
    }

    /// Path of `name` inside the log directory; rejects anything that is
    /// not a plain file name
    fn resolve_log_file(&self, name: &str) -> Option<PathBuf> {
        let directory = self.log_directory.as_deref()?;
        let candidate = Path::new(name);
        if name.is_empty() || candidate.file_name() != Some(candidate.as_os_str()) {
            return None;
        }
        Some(directory.join(candidate))
    }

    /// Register a callback run synchronously for each new entry
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&LogAdded) + Send + Sync + 'static,
    {
        let observer: LogObserver = Arc::new(observer);
        self.observers.subscribe(observer)
    }

    /// Receive each new entry through a channel
    pub fn subscribe_channel(&self) -> Receiver<LogAdded> {
        self.observers.subscribe_channel().1
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Add an echo appender.
    ///
    /// Appenders run while the appender list is locked and must not log
    /// back into this store.
    pub fn add_appender(&self, appender: Box<dyn Appender>) {
        self.appenders.lock().push(appender);
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.lock();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }
}

impl Default for LogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogStore")
            .field("enabled", &self.is_enabled())
            .field("app_name", &self.app_name)
            .field("log_directory", &self.log_directory)
            .field("entries", &self.entry_count())
            .finish()
    }
}

/// Builder for constructing a [`LogStore`] with a fluent API
///
/// # Example
/// ```
/// use debug_log_system::prelude::*;
/// use std::sync::Arc;
///
/// let store = LogStore::builder()
///     .app_name("Shop")
///     .enabled(true)
///     .console_echo(false)
///     .preferences(Arc::new(InMemoryPreferences::new()))
///     .build();
///
/// store.log("ready", LogCategory::Start);
/// assert_eq!(store.entry_count(), 1);
/// ```
pub struct LogStoreBuilder {
    config: LogStoreConfig,
    preferences: Option<Arc<dyn Preferences>>,
    clock: Option<Arc<dyn Clock>>,
    appenders: Vec<Box<dyn Appender>>,
}

impl LogStoreBuilder {
    pub fn new() -> Self {
        Self::from_config(LogStoreConfig::default())
    }

    pub fn from_config(config: LogStoreConfig) -> Self {
        Self {
            config,
            preferences: None,
            clock: None,
            appenders: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.config.app_name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    /// Documents directory; log files go to its `debugLogs` child
    #[must_use = "builder methods return a new value"]
    pub fn documents_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.documents_dir = Some(dir.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.log_directory = Some(dir.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn console_echo(mut self, echo: bool) -> Self {
        self.config.console_echo = echo;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn use_colors(mut self, use_colors: bool) -> Self {
        self.config.use_colors = use_colors;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn preferences(mut self, preferences: Arc<dyn Preferences>) -> Self {
        self.preferences = Some(preferences);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Add an echo appender in addition to the console
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    pub fn build(self) -> LogStore {
        let log_directory = self.config.resolved_log_directory();
        let mut appenders: Vec<Box<dyn Appender>> = Vec::new();
        if self.config.console_echo {
            appenders.push(Box::new(ConsoleAppender::with_colors(self.config.use_colors)));
        }
        appenders.extend(self.appenders);

        LogStore {
            enabled: AtomicBool::new(self.config.enabled),
            state: Mutex::new(StoreState {
                entries: Vec::new(),
                file: FileState::Unopened,
            }),
            observers: ObserverBus::new(),
            appenders: Mutex::new(appenders),
            preferences: self
                .preferences
                .unwrap_or_else(|| Arc::new(InMemoryPreferences::new())),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            app_name: self.config.app_name,
            timestamp_format: self.config.timestamp_format,
            log_directory,
            metrics: StoreMetrics::new(),
        }
    }
}

impl Default for LogStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;
    use crate::core::FixedClock;
    use chrono::{Local, TimeZone};

    fn clock() -> Arc<FixedClock> {
        let at = Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(120);
        Arc::new(FixedClock::new(at))
    }

    fn quiet_store() -> LogStore {
        LogStore::builder()
            .enabled(true)
            .console_echo(false)
            .clock(clock())
            .build()
    }

    #[test]
    fn test_new_store_is_disabled() {
        let store = LogStore::new();
        assert!(!store.is_enabled());
        store.log("ignored", LogCategory::Info);
        assert_eq!(store.entry_count(), 0);
        assert_eq!(store.metrics().suppressed(), 1);
    }

    #[test]
    fn test_configure_toggles_gate() {
        let store = quiet_store();
        store.log("start", LogCategory::Start);
        assert_eq!(store.entries(), vec!["🚀 10:30:45:12 start"]);

        store.configure(false);
        store.log("ignored", LogCategory::None);
        assert_eq!(store.entries(), vec!["🚀 10:30:45:12 start"]);

        store.configure(true);
        store.configure(true);
        assert!(store.is_enabled());
    }

    #[test]
    fn test_sequence_payload() {
        let store = quiet_store();
        store.log(vec!["a", "b", "c"], LogCategory::None);
        assert_eq!(store.entries(), vec!["   10:30:45:12 a b c "]);
    }

    #[test]
    fn test_no_file_without_preference() {
        let store = quiet_store();
        store.log("memory only", LogCategory::Info);
        assert_eq!(store.logs(), None);
        assert_eq!(store.active_file_name(), None);
        assert!(store.list_all_log_files().is_empty());
    }

    #[test]
    fn test_echo_to_appenders() {
        let capture = MemoryAppender::new();
        let store = LogStore::builder()
            .enabled(true)
            .console_echo(false)
            .clock(clock())
            .appender(capture.clone())
            .build();

        store.log("echo", LogCategory::User);
        assert_eq!(capture.lines(), vec!["👤 10:30:45:12 echo"]);
    }

    #[test]
    fn test_panicking_appender_is_isolated() {
        struct PanickingAppender;

        impl Appender for PanickingAppender {
            fn append(&mut self, _entry: &LogEntry) -> Result<()> {
                panic!("boom");
            }
            fn flush(&mut self) -> Result<()> {
                Ok(())
            }
            fn name(&self) -> &str {
                "panicking"
            }
        }

        let capture = MemoryAppender::new();
        let store = LogStore::builder()
            .enabled(true)
            .console_echo(false)
            .appender(PanickingAppender)
            .appender(capture.clone())
            .build();

        store.log("survives", LogCategory::None);
        assert_eq!(capture.len(), 1);
        assert_eq!(store.entry_count(), 1);
    }

    #[test]
    fn test_observer_can_read_store() {
        let store = Arc::new(quiet_store());
        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let store_ref = Arc::downgrade(&store);
            let seen = Arc::clone(&seen);
            store.subscribe(move |event| {
                let count = store_ref.upgrade().map(|s| s.entry_count()).unwrap_or(0);
                seen.lock().push((event.log.clone(), count));
            });
        }

        store.log("observed", LogCategory::Test);
        assert_eq!(
            *seen.lock(),
            vec![("❔ 10:30:45:12 observed".to_string(), 1)]
        );
    }

    #[test]
    fn test_resolve_rejects_paths() {
        let store = LogStore::builder().log_directory("/tmp/logs").build();
        assert!(store.resolve_log_file("../etc/passwd").is_none());
        assert!(store.resolve_log_file("a/b.txt").is_none());
        assert!(store.resolve_log_file("").is_none());
        assert_eq!(
            store.resolve_log_file("app-log-1.txt"),
            Some(PathBuf::from("/tmp/logs/app-log-1.txt"))
        );
    }
}
