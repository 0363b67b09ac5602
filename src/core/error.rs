//! Error types for the debug log system

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Log directory could not be created
    #[error("Cannot create log directory at '{}': {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Active log file could not be opened for writing
    #[error("Cannot create file handle for writing at '{}': {source}", path.display())]
    FileHandleCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Log file could not be read
    #[error("Cannot read log file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Log file could not be deleted
    #[error("Cannot delete log file '{}': {source}", path.display())]
    FileDelete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// One or more remote backends failed during fan-out
    #[error("{failed}/{total} remote backends failed")]
    Backends {
        failed: usize,
        total: usize,
        failures: Vec<BackendFailure>,
    },

    /// Log export error
    #[error("Export failed: {0}")]
    Export(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Error reported by a single remote backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct BackendError(pub String);

impl BackendError {
    pub fn new(msg: impl Into<String>) -> Self {
        BackendError(msg.into())
    }
}

/// A backend that failed while relaying a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendFailure {
    /// Registration index of the backend
    pub index: usize,
    pub backend: String,
    pub error: String,
    /// Whether the backend panicked rather than returning an error
    pub panicked: bool,
}

impl LoggerError {
    pub fn directory_creation(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::DirectoryCreation {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn file_handle(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::FileHandleCreation {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn file_read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::FileRead {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn file_delete(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::FileDelete {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a fan-out error from the collected backend failures
    pub fn backends(total: usize, failures: Vec<BackendFailure>) -> Self {
        LoggerError::Backends {
            failed: failures.len(),
            total,
            failures,
        }
    }

    pub fn export<S: Into<String>>(msg: S) -> Self {
        LoggerError::Export(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
