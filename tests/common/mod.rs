//! Shared testing utilities for crowdfunding-cron CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the work directory.
    ///
    /// Web-gateway variables are scrubbed so runs look like batch invocations
    /// regardless of the test runner's environment.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("crowdfunding-cron").expect("Failed to locate cron binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("GATEWAY_INTERFACE")
            .env_remove("REQUEST_METHOD");
        cmd
    }

    /// Write a settings file pointing the error log at `log_dir`.
    pub fn write_settings(&self, log_dir: &Path) {
        let content = format!("[log]\npath = {:?}\n", log_dir.display().to_string());
        fs::write(self.work_dir.join("crowdfunding.toml"), content)
            .expect("Failed to write settings file");
    }

    /// Path of the error log file under the default settings.
    pub fn default_log_file(&self) -> PathBuf {
        self.work_dir.join("logs").join("error_cron.txt")
    }
}
