use std::fmt;

/// The invocation mode selected by the CLI flags.
///
/// One mode per process run, immutable after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CronMode {
    /// Default mode: routine maintenance work.
    Execute,
    /// Notification mode: backers/project owners get reminded.
    Notify,
    /// Update mode: campaign statistics get refreshed.
    Update,
}

impl CronMode {
    /// All modes in selection-priority order.
    pub const ALL: [CronMode; 3] = [CronMode::Notify, CronMode::Update, CronMode::Execute];

    /// Select the mode from the two presence flags.
    ///
    /// `--notify` wins over `--update` when both are supplied; absence of
    /// both means `Execute`.
    pub fn from_flags(notify: bool, update: bool) -> CronMode {
        if notify {
            CronMode::Notify
        } else if update {
            CronMode::Update
        } else {
            CronMode::Execute
        }
    }

    /// Name of the hook fired for this mode.
    pub fn event_name(&self) -> &'static str {
        match self {
            CronMode::Execute => "onCronExecute",
            CronMode::Notify => "onCronNotify",
            CronMode::Update => "onCronUpdate",
        }
    }

    /// Lowercase label used in context strings and progress output.
    pub fn label(&self) -> &'static str {
        match self {
            CronMode::Execute => "execute",
            CronMode::Notify => "notify",
            CronMode::Update => "update",
        }
    }
}

impl fmt::Display for CronMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_selects_execute() {
        assert_eq!(CronMode::from_flags(false, false), CronMode::Execute);
    }

    #[test]
    fn notify_flag_selects_notify() {
        assert_eq!(CronMode::from_flags(true, false), CronMode::Notify);
    }

    #[test]
    fn update_flag_selects_update() {
        assert_eq!(CronMode::from_flags(false, true), CronMode::Update);
    }

    #[test]
    fn notify_wins_over_update() {
        assert_eq!(CronMode::from_flags(true, true), CronMode::Notify);
    }

    #[test]
    fn event_names_follow_mode() {
        assert_eq!(CronMode::Execute.event_name(), "onCronExecute");
        assert_eq!(CronMode::Notify.event_name(), "onCronNotify");
        assert_eq!(CronMode::Update.event_name(), "onCronUpdate");
    }

    #[test]
    fn labels_are_lowercase() {
        for mode in CronMode::ALL {
            assert_eq!(mode.label(), mode.label().to_lowercase());
            assert_eq!(mode.to_string(), mode.label());
        }
    }
}
