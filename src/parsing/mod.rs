//! Chat export parsing.
//!
//! Two stages:
//! - [`extract`] finds export records with a line-anchored pattern
//! - [`normalize`] trims, filters and turns records into [`Message`]s
//!
//! [`parse_messages`] runs both over a decoded export.

pub mod extract;
pub mod normalize;

pub use extract::{RawLine, extract};
pub use normalize::{
    TIMESTAMP_FORMAT, detect_group_sender, is_encryption_notice, normalize, parse_timestamp,
};

use crate::message::Message;

/// Parses a decoded export into messages, in file order.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::parse_messages;
///
/// let messages = parse_messages("[1/1/2024, 09:00:00] Alice: hello world");
/// assert_eq!(messages[0].sender, "Alice");
/// assert_eq!(messages[0].word_count, 2);
/// ```
pub fn parse_messages(text: &str) -> Vec<Message> {
    let group_sender = detect_group_sender(text);
    if let Some(name) = &group_sender {
        tracing::debug!(group_sender = %name, "detected group pseudo-sender");
    }

    let rows: Vec<RawLine<'_>> = extract(text).collect();
    let extracted = rows.len();
    let messages = normalize(rows, group_sender.as_deref());

    tracing::debug!(extracted, kept = messages.len(), "parsed export");
    messages
}
