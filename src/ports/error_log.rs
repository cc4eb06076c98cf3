use std::io;

/// Port for the append-only error log.
///
/// Writes are best effort: callers discard the result, so a log-write
/// failure never escalates past the dispatcher.
pub trait ErrorLogPort {
    fn append(&self, message: &str) -> io::Result<()>;
}
