mod error_log;
mod event_dispatch;
mod listener;

pub use error_log::ErrorLogPort;
pub use event_dispatch::EventDispatchPort;
pub use listener::CronListener;
