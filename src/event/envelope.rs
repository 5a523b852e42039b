// file: src/event/envelope.rs
// description: SNS notification envelope and message attribute types
// reference: https://docs.aws.amazon.com/sns/latest/dg/sns-message-and-json-formats.html

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnsEnvelope {
    #[serde(rename = "Records", default)]
    pub records: Vec<SnsRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnsRecord {
    #[serde(rename = "Sns")]
    pub sns: SnsMessage,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnsMessage {
    /// JSON-encoded body, for push notifications the GitHub push payload.
    #[serde(rename = "Message", default)]
    pub message: String,
    #[serde(rename = "MessageAttributes", default)]
    pub message_attributes: HashMap<String, MessageAttribute>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessageAttribute {
    #[serde(rename = "Type", default)]
    pub data_type: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl SnsEnvelope {
    /// The first delivered message, if any. SNS delivers one record per
    /// Lambda invocation.
    pub fn first_message(&self) -> Option<&SnsMessage> {
        self.records.first().map(|record| &record.sns)
    }
}
