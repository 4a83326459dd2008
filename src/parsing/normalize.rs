//! Normalization and filtering of extracted records.
//!
//! Every step here is total: a record that cannot be used is dropped, never
//! reported.

use std::sync::LazyLock;

use chrono::{NaiveDateTime, Timelike};
use regex::Regex;

use super::extract::RawLine;
use crate::message::Message;

/// Day-first numeric date followed by a 24h time.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

const ENCRYPTION_NOTICE: &str = "end-to-end encrypted";

static GROUP_NOTICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\]([^:\n]+):\s*\x{200E}*Messages and calls are end-to-end encrypted")
        .expect("group notice pattern is valid")
});

/// Finds the pseudo-sender that posts the encryption notice.
///
/// Group exports attribute the "Messages and calls are end-to-end encrypted"
/// line to the group's name. Every row sent under that name is later
/// dropped, including rows from a real participant whose display name is
/// identical to it.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::detect_group_sender;
///
/// let text = "[1/1/2024, 08:00:00] Book Club: \u{200E}Messages and calls are end-to-end encrypted.\n\
///             [1/1/2024, 09:00:00] Alice: hi";
/// assert_eq!(detect_group_sender(text).as_deref(), Some("Book Club"));
/// ```
pub fn detect_group_sender(text: &str) -> Option<String> {
    GROUP_NOTICE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Returns `true` for the synthetic encryption notice, in any case.
pub fn is_encryption_notice(text: &str) -> bool {
    text.to_lowercase().contains(ENCRYPTION_NOTICE)
}

/// Parses `D/M/YYYY` and `H:MM:SS` into a local timestamp.
///
/// A `:60` leap second is rejected like any other out-of-range time.
pub fn parse_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{date}, {time}"), TIMESTAMP_FORMAT)
        .ok()
        // chrono keeps a leap second as second 59 with an overflowing fraction
        .filter(|ts| ts.nanosecond() < 1_000_000_000)
}

/// Turns extracted records into messages, keeping extraction order.
///
/// Drops encryption notices, rows sent by `group_sender`, and rows whose
/// timestamp does not parse.
pub fn normalize<'a, I>(rows: I, group_sender: Option<&str>) -> Vec<Message>
where
    I: IntoIterator<Item = RawLine<'a>>,
{
    rows.into_iter()
        .filter_map(|row| {
            let sender = row.sender.trim();
            let text = row.text.trim();

            if is_encryption_notice(text) || group_sender == Some(sender) {
                return None;
            }

            let timestamp = parse_timestamp(row.date, row.time)?;
            Some(Message::new(sender, text, timestamp))
        })
        .collect()
}
