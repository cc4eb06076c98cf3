use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::ports::ErrorLogPort;

/// Name of the error log file inside the configured log directory.
pub const ERROR_LOG_FILE: &str = "error_cron.txt";

/// Append-only error log backed by `<log_path>/error_cron.txt`.
///
/// The file is opened per write; no handle is held across runs, so
/// concurrent cron invocations interleave at the OS append level.
pub struct FileErrorLog {
    log_dir: PathBuf,
}

impl FileErrorLog {
    pub fn new<P: Into<PathBuf>>(log_dir: P) -> Self {
        Self { log_dir: log_dir.into() }
    }

    /// Full path of the log file.
    pub fn path(&self) -> PathBuf {
        self.log_dir.join(ERROR_LOG_FILE)
    }
}

impl ErrorLogPort for FileErrorLog {
    fn append(&self, message: &str) -> io::Result<()> {
        fs::create_dir_all(&self.log_dir)?;
        let mut file = OpenOptions::new().create(true).append(true).open(self.path())?;
        writeln!(file, "{message}")
    }
}
