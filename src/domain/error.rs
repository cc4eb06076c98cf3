use std::io;

use thiserror::Error;

/// Library-wide error type for cron dispatcher operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Invoked from an interactive or web context instead of a batch one.
    #[error("This is a command line only application.")]
    NotBatchEnvironment,

    /// A listener raised an error while handling a fired hook.
    #[error("{event}: {message}")]
    Hook { event: String, message: String },
}

impl AppError {
    /// Build a hook error for the given event name.
    pub fn hook<S: Into<String>>(event: &str, message: S) -> Self {
        AppError::Hook { event: event.to_string(), message: message.into() }
    }
}
