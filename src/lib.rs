//! crowdfunding-cron: CLI dispatcher for crowdfunding platform cron events.
//!
//! The binary parses the invocation mode (`execute`/`notify`/`update`),
//! composes an opaque context string, and fires the matching hook at every
//! listener in a registry the host populates. Plugin implementations live
//! outside this crate; it only defines the [`ports::CronListener`] capability
//! interface and the default adapters behind it.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use app::AppContext;
use app::commands::dispatch;
use app::config::Settings;
use services::{FileErrorLog, ListenerRegistry};

pub use app::commands::dispatch::DispatchOptions;
pub use domain::{AppError, CronMode, DispatchReport, EventContext};

/// Run a cron dispatch with the default adapters and an empty registry.
///
/// Loads settings from `settings_path` (defaults apply when the file is
/// missing) and wires a [`FileErrorLog`] under the configured log path.
/// Hosts that registered their own listeners use [`dispatch_with`] instead.
pub fn dispatch(settings_path: &Path, options: &DispatchOptions) -> Result<DispatchReport, AppError> {
    let settings = Settings::load(settings_path)?;
    let ctx = AppContext::new(ListenerRegistry::new(), FileErrorLog::new(settings.log.path));
    dispatch::execute(&ctx, options)
}

/// Run a cron dispatch against an existing application context.
pub fn dispatch_with<D, L>(
    ctx: &AppContext<D, L>,
    options: &DispatchOptions,
) -> Result<DispatchReport, AppError>
where
    D: ports::EventDispatchPort,
    L: ports::ErrorLogPort,
{
    dispatch::execute(ctx, options)
}
