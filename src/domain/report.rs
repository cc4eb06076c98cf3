use std::time::Duration;

use crate::domain::{CronMode, EventContext};

/// Outcome of a single cron run.
///
/// Ephemeral: printed at the end of the run, never persisted.
#[derive(Debug, Clone)]
pub struct DispatchReport {
    /// Mode that was dispatched.
    pub mode: CronMode,
    /// Context string the hook was fired with.
    pub context: EventContext,
    /// Wall-clock time between start and completion.
    pub elapsed: Duration,
    /// Message of the hook error, when the dispatch failed.
    pub error: Option<String>,
}

impl DispatchReport {
    /// Whether the fired hook completed without error.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    /// Elapsed seconds rendered to three decimal places.
    pub fn elapsed_display(&self) -> String {
        format!("{:.3}", self.elapsed.as_secs_f64())
    }
}
