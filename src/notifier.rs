use ahash::AHashMap;
use reqwest::Client;

use crate::client;
use crate::message::{tag_line, Message};
use crate::options::Options;
use crate::payload::Payload;
use crate::severity::Severity;

/// Channel + color bound to a severity at construction.
struct Template {
    channel: String,
    color: &'static str,
}

/// Posts severity-tagged messages to a Slack incoming webhook.
///
/// Delivery is fire-and-forget by default: failures are logged and swallowed,
/// never surfaced to the caller. Set [`Options::synchronous`] to await each
/// send instead.
pub struct Notifier {
    templates: AHashMap<Severity, Template>,
    client: Client,
    opt: Options,
}

impl Notifier {
    pub fn new(opt: Options) -> Self {
        Self::with_client(opt, client::shared())
    }

    /// Like [`Notifier::new`] with an injected HTTP client.
    pub fn with_client(opt: Options, client: Client) -> Self {
        let mut templates = AHashMap::new();
        for severity in Severity::ALL {
            templates.insert(
                severity,
                Template {
                    channel: severity.channel(&opt).to_string(),
                    color: severity.color(),
                },
            );
        }

        Self {
            templates,
            client,
            opt,
        }
    }

    /// Sends a webhook with the green attachment color.
    pub async fn success(&self, text: &str, snippet: &str, tags: &[&str]) {
        self.send(Severity::Success, text, snippet, tags).await;
    }

    /// Sends a webhook with the blue attachment color.
    pub async fn info(&self, text: &str, snippet: &str, tags: &[&str]) {
        self.send(Severity::Info, text, snippet, tags).await;
    }

    /// Sends a webhook with the orange attachment color.
    pub async fn warning(&self, text: &str, snippet: &str, tags: &[&str]) {
        self.send(Severity::Warning, text, snippet, tags).await;
    }

    /// Sends a webhook with the red attachment color.
    pub async fn error(&self, text: &str, snippet: &str, tags: &[&str]) {
        self.send(Severity::Error, text, snippet, tags).await;
    }

    async fn send(&self, severity: Severity, text: &str, snippet: &str, tags: &[&str]) {
        let (channel, color) = match self.templates.get(&severity) {
            Some(t) => (t.channel.clone(), t.color),
            None => (String::new(), ""),
        };

        self.post(Message {
            channel,
            text: text.to_string(),
            snippet: snippet.to_string(),
            color: color.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        })
        .await;
    }

    /// Posts an arbitrary message: resolves the final channel, merges the tag
    /// line and delivers the payload inline or on a background task per
    /// configuration.
    pub async fn post(&self, msg: Message) {
        let channel = if msg.channel.is_empty() {
            self.opt.default_channel.as_str()
        } else {
            msg.channel.as_str()
        };

        let tags = tag_line(&self.opt.env, &self.opt.default_tags, &msg.tags);
        let payload = Payload::build(channel, &msg, &tags);

        if self.opt.synchronous {
            deliver(self.client.clone(), self.opt.webhook_url.clone(), payload).await;
        } else {
            tokio::spawn(deliver(
                self.client.clone(),
                self.opt.webhook_url.clone(),
                payload,
            ));
        }
    }
}

async fn deliver(client: Client, url: String, payload: Payload) {
    let resp = match client.post(&url).json(&payload).send().await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(target = "webhook_notify", "webhook delivery failed: {}", e);
            return;
        }
    };

    let status = resp.status().as_u16();
    if status >= 300 {
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(target = "webhook_notify", status, "webhook rejected: {}", body);
    }
}
