//! Coverage for the public library facade used by host processes.

use std::sync::{Arc, Mutex};

use crowdfunding_cron::app::AppContext;
use crowdfunding_cron::ports::CronListener;
use crowdfunding_cron::services::{FileErrorLog, ListenerRegistry};
use crowdfunding_cron::{AppError, CronMode, DispatchOptions, EventContext, dispatch, dispatch_with};
use tempfile::TempDir;

struct HostListener {
    seen: Arc<Mutex<Vec<String>>>,
}

impl CronListener for HostListener {
    fn name(&self) -> &str {
        "host-listener"
    }

    fn on_update(&self, context: &EventContext) -> Result<(), AppError> {
        self.seen.lock().unwrap().push(context.to_string());
        Ok(())
    }
}

#[test]
fn dispatch_with_missing_settings_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let options = DispatchOptions::default();

    let report = dispatch(&dir.path().join("absent.toml"), &options).unwrap();

    assert!(report.succeeded());
    assert_eq!(report.mode, CronMode::Execute);
}

#[test]
fn host_registered_listener_receives_composed_context() {
    let dir = TempDir::new().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let mut registry = ListenerRegistry::new();
    registry.register(Box::new(HostListener { seen: Arc::clone(&seen) }));
    let ctx = AppContext::new(registry, FileErrorLog::new(dir.path()));

    let options = DispatchOptions { update: true, context: "proj-3".to_string(), ..Default::default() };
    let report = dispatch_with(&ctx, &options).unwrap();

    assert!(report.succeeded());
    assert_eq!(seen.lock().unwrap().as_slice(), ["com_crowdfunding.cron.update.proj-3"]);
}
