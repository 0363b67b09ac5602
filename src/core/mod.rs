//! Core log store types and traits

pub mod appender;
pub mod category;
pub mod config;
pub mod error;
pub mod log_entry;
pub mod log_store;
pub mod metrics;
pub mod observer;
pub mod payload;
pub mod preferences;
pub mod severity;
pub mod shorthand;
pub mod timestamp;

pub use appender::Appender;
pub use category::LogCategory;
pub use config::{LogStoreConfig, LOG_DIRECTORY_NAME};
pub use error::{BackendError, BackendFailure, LoggerError, Result};
pub use log_entry::{LogEntry, CONTINUATION_INDENT};
pub use log_store::{LogStore, LogStoreBuilder};
pub use metrics::StoreMetrics;
pub use observer::{LogAdded, LogObserver, ObserverBus, SubscriptionId, LOG_ADDED, LOG_ADDED_KEY};
pub use payload::LogPayload;
pub use preferences::{InMemoryPreferences, JsonPreferences, Preferences, DEBUG_LOG_KEY};
pub use severity::Severity;
pub use shorthand::DebugLog;
pub use timestamp::{Clock, FixedClock, SystemClock, TimestampFormat};
