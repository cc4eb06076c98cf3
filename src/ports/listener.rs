use crate::domain::{AppError, EventContext};

/// Capability interface for cron plugin handlers.
///
/// A listener subscribes to the three cron hooks; each method defaults to a
/// no-op so implementations only override the hooks they care about. Hooks
/// are invoked synchronously and an `Err` bubbles to the dispatcher.
pub trait CronListener {
    /// Identifier used in diagnostics.
    fn name(&self) -> &str;

    /// Fired on a plain run (no mode flag).
    fn on_execute(&self, _context: &EventContext) -> Result<(), AppError> {
        Ok(())
    }

    /// Fired on `--notify` runs.
    fn on_notify(&self, _context: &EventContext) -> Result<(), AppError> {
        Ok(())
    }

    /// Fired on `--update` runs.
    fn on_update(&self, _context: &EventContext) -> Result<(), AppError> {
        Ok(())
    }
}
