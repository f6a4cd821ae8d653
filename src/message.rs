/// Transient webhook message: created per call, discarded after send.
#[derive(Clone, Debug, Default)]
pub struct Message {
    /// Destination channel (empty = notifier default)
    pub channel: String,
    /// Attachment title
    pub text: String,
    /// Attachment body
    pub snippet: String,
    pub color: String,
    /// Per-call tags, merged with env + default tags at post time
    pub tags: Vec<String>,
}

/// Merged tag line: env tag + default tags + per-call tags, each wrapped in
/// backticks, sorted lexicographically, joined with single spaces.
pub(crate) fn tag_line(env: &str, default_tags: &[String], tags: &[String]) -> String {
    let mut rendered = Vec::new();

    if !env.is_empty() {
        rendered.push(format!("`env: {env}`"));
    }
    rendered.extend(default_tags.iter().map(|t| format!("`{t}`")));
    rendered.extend(tags.iter().map(|t| format!("`{t}`")));

    rendered.sort_unstable();
    rendered.join(" ")
}
