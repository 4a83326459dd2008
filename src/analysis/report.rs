//! The analysis report and its views.
//!
//! Field names in the serialized form are fixed; consumers of the JSON
//! output key on them (`"Name"` is capitalized in the per-sender rows).

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Messages sent by one sender.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SenderMessageCount {
    #[serde(rename = "Name")]
    pub name: String,
    pub message_count: usize,
}

/// Words written by one sender.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SenderWordCount {
    #[serde(rename = "Name")]
    pub name: String,
    pub word_count: usize,
}

/// Messages one sender sent during one hour of the day.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct HourActivity {
    #[serde(rename = "Name")]
    pub name: String,
    pub hour: u32,
    pub count: usize,
}

/// Longest silence, in hours, that one sender broke.
///
/// Measured against the previous message by anyone. `gap` is `None` when
/// the sender's only message opens the chat.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SilenceBroken {
    #[serde(rename = "Name")]
    pub name: String,
    pub gap: Option<f64>,
}

/// Longest stretch, in minutes, between two of one sender's own messages.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AbsencePeriod {
    #[serde(rename = "Name")]
    pub name: String,
    pub gap: f64,
    pub absence_start: NaiveDateTime,
    pub absence_end: NaiveDateTime,
}

/// Per-sender message counts restricted to morning and evening hours.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct MorningEvening {
    pub morning: BTreeMap<String, usize>,
    pub evening: BTreeMap<String, usize>,
}

/// The single longest message by character count.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct LongestByChar {
    pub sender: Option<String>,
    pub char_count: Option<usize>,
    pub preview: Option<String>,
    pub full: Option<String>,
}

/// The single longest message by word count.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct LongestByWord {
    pub sender: Option<String>,
    pub word_count: Option<usize>,
    pub preview: Option<String>,
    pub full: Option<String>,
}

/// The chronologically earliest message.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct FirstMessage {
    pub sender: Option<String>,
    pub message: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
}

/// Per-sender counts for one search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermCounts {
    pub term: String,
    pub counts: BTreeMap<String, usize>,
}

/// Per-term, per-sender counts, in the order the terms were configured.
///
/// Serializes as a map from term to `{sender: count}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermTally(pub Vec<TermCounts>);

impl TermTally {
    /// Returns the per-sender counts for `term`.
    pub fn get(&self, term: &str) -> Option<&BTreeMap<String, usize>> {
        self.0.iter().find(|t| t.term == term).map(|t| &t.counts)
    }

    /// Returns how many messages from `sender` matched `term`.
    pub fn count(&self, term: &str, sender: &str) -> usize {
        self.get(term)
            .and_then(|counts| counts.get(sender))
            .copied()
            .unwrap_or(0)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|t| t.term.as_str())
    }
}

impl Serialize for TermTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.term, &entry.counts)?;
        }
        map.end()
    }
}

/// The twelve views computed by one analysis run.
///
/// Views are independent; they share the message set but nothing else.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Report {
    pub message_counts: Vec<SenderMessageCount>,
    pub word_counts: Vec<SenderWordCount>,
    pub most_active_hour: Vec<HourActivity>,
    pub longest_gap_hours: Vec<SilenceBroken>,
    pub absence_periods: Vec<AbsencePeriod>,
    pub morning_evening: MorningEvening,
    pub avg_message_length: BTreeMap<String, f64>,
    pub longest_message_by_char: LongestByChar,
    pub longest_message_by_word: LongestByWord,
    pub keyword_mentions: TermTally,
    pub first_message: FirstMessage,
    pub swear_word_counts: TermTally,
}

impl Report {
    /// Total messages counted, i.e. the sum of `message_counts`.
    pub fn total_messages(&self) -> usize {
        self.message_counts.iter().map(|c| c.message_count).sum()
    }

    /// Message count for `sender`, or 0 if they sent nothing.
    pub fn message_count(&self, sender: &str) -> usize {
        self.message_counts
            .iter()
            .find(|c| c.name == sender)
            .map(|c| c.message_count)
            .unwrap_or(0)
    }

    /// Returns `true` if no message survived parsing.
    pub fn is_empty(&self) -> bool {
        self.message_counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_serializes_nulls() {
        let json = serde_json::to_value(Report::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 12);
        assert!(json["longest_message_by_char"]["sender"].is_null());
        assert!(json["longest_message_by_word"]["word_count"].is_null());
        assert!(json["first_message"]["timestamp"].is_null());
        assert_eq!(json["morning_evening"]["morning"], serde_json::json!({}));
        assert_eq!(json["message_counts"], serde_json::json!([]));
    }

    #[test]
    fn test_term_tally_serializes_in_order() {
        let tally = TermTally(vec![
            TermCounts {
                term: "photo".into(),
                counts: BTreeMap::from([("Bob".to_string(), 2)]),
            },
            TermCounts {
                term: "gif".into(),
                counts: BTreeMap::new(),
            },
        ]);
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(json, r#"{"photo":{"Bob":2},"gif":{}}"#);
        assert_eq!(tally.count("photo", "Bob"), 2);
        assert_eq!(tally.count("gif", "Bob"), 0);
        assert_eq!(tally.terms().collect::<Vec<_>>(), vec!["photo", "gif"]);
    }

    #[test]
    fn test_sender_rows_use_capitalized_name() {
        let row = SenderMessageCount {
            name: "Alice".into(),
            message_count: 3,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"Name":"Alice","message_count":3}"#);
    }
}
