// file: src/event/mod.rs
// description: inbound notification module exports
// reference: internal module structure

pub mod classifier;
pub mod envelope;
pub mod payload;

pub use classifier::{GITHUB_EVENT_ATTRIBUTE, PUSH_EVENT, is_push_event};
pub use envelope::{MessageAttribute, SnsEnvelope, SnsMessage, SnsRecord};
pub use payload::{HeadCommit, PushPayload, Repository};
