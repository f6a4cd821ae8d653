/// Static notifier configuration. Immutable after construction.
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// Environment tag, rendered as `env: <name>` in the tag line (empty = omitted)
    pub env: String,
    /// Tags appended to every message
    pub default_tags: Vec<String>,
    /// Await each send instead of spawning a background task
    pub synchronous: bool,

    /// Slack incoming-webhook URL
    pub webhook_url: String,
    /// Fallback channel when a message carries no channel of its own
    pub default_channel: String,
    pub success_channel: String,
    pub info_channel: String,
    pub warning_channel: String,
    pub error_channel: String,
}
