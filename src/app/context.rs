use crate::ports::{ErrorLogPort, EventDispatchPort};

/// Application context holding dependencies for command execution.
pub struct AppContext<D: EventDispatchPort, L: ErrorLogPort> {
    dispatcher: D,
    error_log: L,
}

impl<D: EventDispatchPort, L: ErrorLogPort> AppContext<D, L> {
    /// Create a new application context.
    pub fn new(dispatcher: D, error_log: L) -> Self {
        Self { dispatcher, error_log }
    }

    /// Get a reference to the event dispatcher.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Get a reference to the error log.
    pub fn error_log(&self) -> &L {
        &self.error_log
    }
}
