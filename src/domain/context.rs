use std::fmt;

use crate::domain::CronMode;

/// Fixed prefix identifying the component that owns the cron events.
pub const CONTEXT_PREFIX: &str = "com_crowdfunding.cron";

/// Opaque context string handed to every listener of a fired hook.
///
/// Composed as `com_crowdfunding.cron.<mode>.<raw>` where `<raw>` is the
/// caller-supplied `--context` value, possibly empty. The string carries
/// which campaign or action the run concerns; this crate never interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventContext(String);

impl EventContext {
    /// Compose the context string for a mode and a raw context value.
    pub fn compose(mode: CronMode, raw: &str) -> Self {
        EventContext(format!("{}.{}.{}", CONTEXT_PREFIX, mode.label(), raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
