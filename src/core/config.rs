//! Store configuration loadable from JSON

use super::error::{LoggerError, Result};
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the log directory under the documents directory
pub const LOG_DIRECTORY_NAME: &str = "debugLogs";

/// Configuration for a [`LogStore`](super::LogStore)
///
/// # Examples
///
/// ```
/// use debug_log_system::core::LogStoreConfig;
///
/// let config = LogStoreConfig::from_json_str(r#"{
///     "app_name": "Shop",
///     "enabled": true,
///     "documents_dir": "/data/docs"
/// }"#).unwrap();
///
/// assert_eq!(
///     config.resolved_log_directory().unwrap(),
///     std::path::Path::new("/data/docs/debugLogs")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogStoreConfig {
    /// Used as the log file name prefix; empty falls back to `log.txt`
    pub app_name: String,
    /// Initial value of the enable gate
    pub enabled: bool,
    /// Application documents directory; logs go to its `debugLogs` child
    pub documents_dir: Option<PathBuf>,
    /// Explicit log directory, takes precedence over `documents_dir`
    pub log_directory: Option<PathBuf>,
    pub timestamp_format: TimestampFormat,
    /// Echo entries to stdout
    pub console_echo: bool,
    pub use_colors: bool,
}

impl Default for LogStoreConfig {
    fn default() -> Self {
        Self {
            app_name: String::new(),
            enabled: false,
            documents_dir: None,
            log_directory: None,
            timestamp_format: TimestampFormat::default(),
            console_echo: true,
            use_colors: false,
        }
    }
}

impl LogStoreConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| LoggerError::file_read(path, e))?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.timestamp_format.is_valid() {
            return Err(LoggerError::config(
                "LogStoreConfig",
                format!("invalid timestamp format {:?}", self.timestamp_format),
            ));
        }
        if self.app_name.contains(['/', '\\']) {
            return Err(LoggerError::config(
                "LogStoreConfig",
                format!("app name '{}' must not contain path separators", self.app_name),
            ));
        }
        Ok(())
    }

    /// Directory log files live in, if file logging can happen at all
    pub fn resolved_log_directory(&self) -> Option<PathBuf> {
        self.log_directory.clone().or_else(|| {
            self.documents_dir
                .as_ref()
                .map(|docs| docs.join(LOG_DIRECTORY_NAME))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogStoreConfig::default();
        assert!(!config.enabled);
        assert!(config.console_echo);
        assert_eq!(config.resolved_log_directory(), None);
    }

    #[test]
    fn test_explicit_directory_wins() {
        let config = LogStoreConfig {
            documents_dir: Some(PathBuf::from("/docs")),
            log_directory: Some(PathBuf::from("/logs")),
            ..Default::default()
        };
        assert_eq!(config.resolved_log_directory(), Some(PathBuf::from("/logs")));
    }

    #[test]
    fn test_invalid_timestamp_rejected() {
        let err = LogStoreConfig::from_json_str(r#"{"timestamp_format": {"Custom": ""}}"#)
            .expect_err("empty custom format");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_app_name_with_separator_rejected() {
        let err = LogStoreConfig::from_json_str(r#"{"app_name": "../evil"}"#)
            .expect_err("path separator");
        assert!(err.to_string().contains("path separators"));
    }

    #[test]
    fn test_malformed_json() {
        let err = LogStoreConfig::from_json_str("{").expect_err("malformed");
        assert!(matches!(err, LoggerError::JsonError(_)));
    }
}
