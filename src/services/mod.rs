//! Default adapters behind the ports.

mod file_error_log;
mod listener_registry;

pub use file_error_log::{ERROR_LOG_FILE, FileErrorLog};
pub use listener_registry::ListenerRegistry;
