//! The normalized message record.
//!
//! A [`Message`] is produced by the normalizer from one matched export line and
//! carries every per-message feature the aggregator needs, computed once.
//!
//! # Example
//!
//! ```
//! use chatstats::message::{Message, Period};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 30, 0)
//!     .unwrap();
//! let msg = Message::new("Alice", "good morning all", ts);
//!
//! assert_eq!(msg.word_count, 3);
//! assert_eq!(msg.char_count, 16);
//! assert_eq!(msg.hour, 9);
//! assert_eq!(msg.period, Period::Morning);
//! ```

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Coarse time-of-day bucket derived from the hour of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// 05:00 up to (not including) 12:00
    Morning,
    /// 18:00 up to midnight
    Evening,
    /// Everything else
    Other,
}

impl Period {
    /// Buckets an hour of the day (0..=23).
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Period::Morning,
            18..=23 => Period::Evening,
            _ => Period::Other,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Morning => write!(f, "morning"),
            Period::Evening => write!(f, "evening"),
            Period::Other => write!(f, "other"),
        }
    }
}

/// A chat message with its derived features.
///
/// | Field | Meaning |
/// |-------|---------|
/// | `sender` | Trimmed display name |
/// | `text` | Trimmed message text |
/// | `timestamp` | Local date and time, no offset |
/// | `word_count` | Whitespace-delimited tokens (`""` has 0) |
/// | `char_count` | Length in code points |
/// | `hour` | Hour of `timestamp` |
/// | `period` | Bucket of `hour` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub text: String,
    pub timestamp: NaiveDateTime,
    pub word_count: usize,
    pub char_count: usize,
    pub hour: u32,
    pub period: Period,
}

impl Message {
    /// Builds a message and derives its features from `text` and `timestamp`.
    pub fn new(sender: impl Into<String>, text: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        let text = text.into();
        let hour = timestamp.hour();
        Self {
            sender: sender.into(),
            word_count: text.split_whitespace().count(),
            char_count: text.chars().count(),
            hour,
            period: Period::from_hour(hour),
            text,
            timestamp,
        }
    }
}
