// file: src/event/classifier.rs
// description: decides whether an inbound notification is a GitHub push event
// reference: GitHub webhook deliveries carry their kind in X-Github-Event

use crate::event::envelope::SnsEnvelope;

/// Message attribute GitHub's SNS integration sets on every delivery.
/// The wire format spells it with a lowercase "h".
pub const GITHUB_EVENT_ATTRIBUTE: &str = "X-Github-Event";

/// Attribute value identifying a push to a branch.
pub const PUSH_EVENT: &str = "push";

/// Returns true iff the notification carries the push event attribute.
/// Exact, case-sensitive match; anything absent or malformed is false.
pub fn is_push_event(envelope: &SnsEnvelope) -> bool {
    envelope
        .first_message()
        .and_then(|message| message.message_attributes.get(GITHUB_EVENT_ATTRIBUTE))
        .map(|attribute| attribute.value == PUSH_EVENT)
        .unwrap_or(false)
}
