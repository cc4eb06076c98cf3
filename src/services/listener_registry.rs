use crate::domain::{AppError, CronMode, EventContext};
use crate::ports::{CronListener, EventDispatchPort};

/// In-process listener registry, populated by the host at startup.
///
/// This crate never loads plugins itself; hosts construct their handlers and
/// register them here before dispatching. An empty registry is valid — a
/// trigger with zero subscribers succeeds.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<Box<dyn CronListener>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Fan-out follows registration order.
    pub fn register(&mut self, listener: Box<dyn CronListener>) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl EventDispatchPort for ListenerRegistry {
    fn trigger(&self, mode: CronMode, context: &EventContext) -> Result<(), AppError> {
        for listener in &self.listeners {
            match mode {
                CronMode::Execute => listener.on_execute(context)?,
                CronMode::Notify => listener.on_notify(context)?,
                CronMode::Update => listener.on_update(context)?,
            }
        }
        Ok(())
    }
}
