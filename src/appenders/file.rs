//! Per-run log file

use crate::core::{LoggerError, Result};
use chrono::{DateTime, Local};
#[cfg(not(windows))]
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Fallback file name when no application name is configured
pub const FALLBACK_FILE_NAME: &str = "log.txt";

/// File name for a run started at `created`: `<app>-log-<unix seconds>.txt`
///
/// Seconds are rounded to the nearest whole second, so names sort
/// lexicographically in creation order for timestamps of equal width.
/// Path separators in `app_name` become `_`, so the result is always a
/// plain file name inside the log directory.
pub fn log_file_name(app_name: &str, created: &DateTime<Local>) -> String {
    if app_name.is_empty() {
        return FALLBACK_FILE_NAME.to_string();
    }
    let rounded = (created.timestamp_millis() + 500).div_euclid(1000);
    format!("{}-log-{}.txt", app_name.replace(['/', '\\'], "_"), rounded)
}

/// Append-only handle on the log file of the current run
pub struct LogFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl LogFile {
    /// Create `directory` if needed and open the run's file for appending.
    ///
    /// An advisory exclusive lock is attempted on the file. Failing to lock
    /// is not an error. Windows locks are mandatory and would block reading
    /// the file back through a second handle, so none is taken there.
    pub fn open(directory: &Path, app_name: &str, created: &DateTime<Local>) -> Result<Self> {
        fs::create_dir_all(directory)
            .map_err(|e| LoggerError::directory_creation(directory, e))?;

        let path = directory.join(log_file_name(app_name, created));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_handle(&path, e))?;
        #[cfg(not(windows))]
        let _ = FileExt::try_lock_exclusive(&file);

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Append `line` plus a newline and flush so readers see it at once
    pub fn append_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    pub fn read_to_string(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| LoggerError::file_read(&self.path, e))
    }
}

impl Drop for LogFile {
    fn drop(&mut self) {
        let _ = self.writer.flush();
        #[cfg(not(windows))]
        let _ = FileExt::unlock(self.writer.get_ref());
    }
}
