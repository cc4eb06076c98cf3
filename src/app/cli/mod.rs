//! CLI Adapter.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::app::commands::dispatch::{self, DispatchOptions};
use crate::app::config::{DEFAULT_SETTINGS_FILE, Settings};
use crate::app::{AppContext, environment};
use crate::domain::{AppError, DispatchReport};
use crate::services::{FileErrorLog, ListenerRegistry};

#[derive(Parser)]
#[command(name = "crowdfunding-cron")]
#[command(version)]
#[command(
    about = "Fire crowdfunding platform cron hooks (execute/notify/update)",
    long_about = None
)]
struct Cli {
    /// Fire the notify hook instead of execute
    #[arg(long)]
    notify: bool,
    /// Fire the update hook instead of execute (ignored when --notify is present)
    #[arg(long)]
    update: bool,
    /// Raw context appended to the event context string
    #[arg(long, default_value = "")]
    context: String,
    /// Path to the settings file
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
}

/// Entry point for the CLI.
///
/// Exit codes: 0 on success, 1 when the fired hook failed, 2 on a fatal
/// startup error (non-batch environment or malformed settings).
pub fn run() -> ! {
    let cli = Cli::parse();

    let code = match run_cron(&cli) {
        Ok(report) => {
            if report.succeeded() {
                0
            } else {
                1
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            2
        }
    };

    process::exit(code)
}

fn run_cron(cli: &Cli) -> Result<DispatchReport, AppError> {
    environment::ensure_batch_environment()?;
    let settings = Settings::load(&cli.config)?;

    println!("Crowdfunding CRON");
    println!("============================");

    let ctx = AppContext::new(ListenerRegistry::new(), FileErrorLog::new(settings.log.path));
    let options = DispatchOptions {
        notify: cli.notify,
        update: cli.update,
        context: cli.context.clone(),
    };

    let report = dispatch::execute(&ctx, &options)?;

    println!("Total Processing Time: {} seconds.", report.elapsed_display());
    println!();

    Ok(report)
}
