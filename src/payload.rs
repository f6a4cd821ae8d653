use serde::Serialize;

use crate::message::Message;

/// Wire shape of the webhook request body.
#[derive(Serialize)]
pub struct Payload {
    pub channel: String,
    pub link_names: u8,
    pub attachments: Vec<Attachment>,
}

#[derive(Serialize)]
pub struct Attachment {
    pub title: String,
    pub color: String,
    pub text: String,
    pub mrkdwn_in: Vec<&'static str>,
}

impl Payload {
    pub(crate) fn build(channel: &str, msg: &Message, tag_line: &str) -> Self {
        Payload {
            channel: channel.to_string(),
            link_names: 1,
            attachments: vec![Attachment {
                title: msg.text.clone(),
                color: msg.color.clone(),
                text: format!("{}\n{}", msg.snippet, tag_line),
                mrkdwn_in: vec!["text"],
            }],
        }
    }
}
