use std::time::Instant;

use crate::app::AppContext;
use crate::domain::{AppError, CronMode, DispatchReport, EventContext};
use crate::ports::{ErrorLogPort, EventDispatchPort};

/// Options for a single cron run.
#[derive(Debug, Clone, Default)]
pub struct DispatchOptions {
    /// Fire the notify hook. Wins over `update` when both are set.
    pub notify: bool,
    /// Fire the update hook.
    pub update: bool,
    /// Raw context appended to the composed context string.
    pub context: String,
}

/// Run the cron dispatch: select the mode, fire the hook, time the run.
///
/// A hook error does not fail the run. It is appended to the error log
/// (best effort), echoed to stdout, and recorded in the returned report;
/// the caller decides how to surface it.
pub fn execute<D: EventDispatchPort, L: ErrorLogPort>(
    ctx: &AppContext<D, L>,
    options: &DispatchOptions,
) -> Result<DispatchReport, AppError> {
    let start = Instant::now();

    let mode = CronMode::from_flags(options.notify, options.update);
    let context = EventContext::compose(mode, &options.context);

    println!("{} context: {}", mode.label(), context);
    println!("============================");

    let error = match ctx.dispatcher().trigger(mode, &context) {
        Ok(()) => None,
        Err(e) => {
            let message = e.to_string();
            // Log-write failures are dropped; there is no secondary path.
            let _ = ctx.error_log().append(&message);
            println!("{message}");
            Some(message)
        }
    };

    Ok(DispatchReport { mode, context, elapsed: start.elapsed(), error })
}
