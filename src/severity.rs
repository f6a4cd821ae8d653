use crate::options::Options;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    /// Slack attachment color bound to this severity.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Success => "good",
            Severity::Info => "#3AA3E3",
            Severity::Warning => "warning",
            Severity::Error => "danger",
        }
    }

    /// Configured destination channel (may be empty, resolved against the
    /// default channel at post time).
    pub(crate) fn channel(self, opt: &Options) -> &str {
        match self {
            Severity::Success => &opt.success_channel,
            Severity::Info => &opt.info_channel,
            Severity::Warning => &opt.warning_channel,
            Severity::Error => &opt.error_channel,
        }
    }
}
