use std::env;
use std::ffi::OsString;

use crate::domain::AppError;

/// Environment variables set by web gateways but absent in batch contexts.
const GATEWAY_VARS: [&str; 2] = ["GATEWAY_INTERFACE", "REQUEST_METHOD"];

/// Refuse to run outside a batch (cron/CLI) execution context.
///
/// A web gateway invoking the binary would carry CGI-style variables; their
/// presence is a fatal startup error before anything is dispatched.
pub fn ensure_batch_environment() -> Result<(), AppError> {
    ensure_batch_with(|name| env::var_os(name))
}

fn ensure_batch_with<F>(lookup: F) -> Result<(), AppError>
where
    F: Fn(&str) -> Option<OsString>,
{
    if GATEWAY_VARS.iter().any(|name| lookup(name).is_some()) {
        return Err(AppError::NotBatchEnvironment);
    }
    Ok(())
}
