use crate::domain::{AppError, CronMode, EventContext};

/// Port for firing a named cron hook at every registered listener.
///
/// Fan-out is synchronous and ordered; the first listener error aborts the
/// fan-out and bubbles to the caller.
pub trait EventDispatchPort {
    fn trigger(&self, mode: CronMode, context: &EventContext) -> Result<(), AppError>;
}
