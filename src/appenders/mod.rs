//! Appender implementations

pub mod console;
pub mod file;
pub mod memory;

pub use console::ConsoleAppender;
pub use file::{log_file_name, LogFile, FALLBACK_FILE_NAME};
pub use memory::MemoryAppender;

// Re-export trait for convenience
pub use crate::core::Appender;
