//! Core types for the cron dispatcher. Pure values, no I/O.

mod context;
mod error;
mod mode;
mod report;

pub use context::{CONTEXT_PREFIX, EventContext};
pub use error::AppError;
pub use mode::CronMode;
pub use report::DispatchReport;
