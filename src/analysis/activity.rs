//! Volume and timing views: counts per sender, per hour and per period.

use std::collections::BTreeMap;

use super::report::{HourActivity, MorningEvening, SenderMessageCount, SenderWordCount};
use crate::message::{Message, Period};

/// Tallies `value` per sender. Keys come out in sender order.
fn sum_by_sender<'a, F>(messages: &'a [Message], value: F) -> BTreeMap<&'a str, usize>
where
    F: Fn(&Message) -> usize,
{
    let mut totals = BTreeMap::new();
    for msg in messages {
        *totals.entry(msg.sender.as_str()).or_insert(0) += value(msg);
    }
    totals
}

/// Messages per sender, busiest first. Equal counts stay in sender order.
pub fn message_counts(messages: &[Message]) -> Vec<SenderMessageCount> {
    let mut rows: Vec<_> = sum_by_sender(messages, |_| 1)
        .into_iter()
        .map(|(name, message_count)| SenderMessageCount {
            name: name.to_string(),
            message_count,
        })
        .collect();
    rows.sort_by(|a, b| b.message_count.cmp(&a.message_count));
    rows
}

/// Words per sender, wordiest first.
pub fn word_counts(messages: &[Message]) -> Vec<SenderWordCount> {
    let mut rows: Vec<_> = sum_by_sender(messages, |m| m.word_count)
        .into_iter()
        .map(|(name, word_count)| SenderWordCount {
            name: name.to_string(),
            word_count,
        })
        .collect();
    rows.sort_by(|a, b| b.word_count.cmp(&a.word_count));
    rows
}

/// Message count for every (sender, hour) pair that occurs.
pub fn most_active_hour(messages: &[Message]) -> Vec<HourActivity> {
    let mut counts: BTreeMap<(&str, u32), usize> = BTreeMap::new();
    for msg in messages {
        *counts.entry((msg.sender.as_str(), msg.hour)).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|((name, hour), count)| HourActivity {
            name: name.to_string(),
            hour,
            count,
        })
        .collect()
}

fn count_in_period(messages: &[Message], period: Period) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for msg in messages.iter().filter(|m| m.period == period) {
        *counts.entry(msg.sender.clone()).or_insert(0) += 1;
    }
    counts
}

/// Morning and evening message counts. Senders with none are absent.
pub fn morning_evening(messages: &[Message]) -> MorningEvening {
    MorningEvening {
        morning: count_in_period(messages, Period::Morning),
        evening: count_in_period(messages, Period::Evening),
    }
}

/// Mean message length in characters, per sender.
pub fn avg_message_length(messages: &[Message]) -> BTreeMap<String, f64> {
    let counts = sum_by_sender(messages, |_| 1);
    sum_by_sender(messages, |m| m.char_count)
        .into_iter()
        .map(|(name, chars)| {
            let n = counts.get(name).copied().unwrap_or(1);
            (name.to_string(), chars as f64 / n as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg(sender: &str, text: &str, hour: u32) -> Message {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        Message::new(sender, text, ts)
    }

    #[test]
    fn test_message_counts_sorted_desc() {
        let messages = vec![
            msg("Bob", "a", 9),
            msg("Alice", "b", 9),
            msg("Alice", "c", 10),
        ];
        let counts = message_counts(&messages);
        assert_eq!(counts[0].name, "Alice");
        assert_eq!(counts[0].message_count, 2);
        assert_eq!(counts[1].name, "Bob");
    }

    #[test]
    fn test_message_counts_ties_in_sender_order() {
        let messages = vec![msg("Zed", "a", 9), msg("Amy", "b", 9)];
        let names: Vec<_> = message_counts(&messages).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Amy", "Zed"]);
    }

    #[test]
    fn test_word_counts() {
        let messages = vec![
            msg("Alice", "hello world", 9),
            msg("Bob", "one two three four", 9),
            msg("Alice", "", 9),
        ];
        let counts = word_counts(&messages);
        assert_eq!(counts[0].name, "Bob");
        assert_eq!(counts[0].word_count, 4);
        assert_eq!(counts[1].word_count, 2);
    }

    #[test]
    fn test_most_active_hour_omits_empty_hours() {
        let messages = vec![msg("Alice", "a", 9), msg("Alice", "b", 9), msg("Alice", "c", 22)];
        let hours = most_active_hour(&messages);
        assert_eq!(hours.len(), 2);
        assert_eq!(hours[0].hour, 9);
        assert_eq!(hours[0].count, 2);
        assert_eq!(hours[1].hour, 22);
    }

    #[test]
    fn test_morning_evening_absent_not_zero() {
        let messages = vec![msg("Alice", "a", 9), msg("Bob", "b", 14), msg("Bob", "c", 19)];
        let me = morning_evening(&messages);
        assert_eq!(me.morning.get("Alice"), Some(&1));
        assert!(!me.morning.contains_key("Bob"));
        assert_eq!(me.evening.get("Bob"), Some(&1));
        assert!(!me.evening.contains_key("Alice"));
    }

    #[test]
    fn test_avg_message_length() {
        let messages = vec![msg("Alice", "abcd", 9), msg("Alice", "ab", 9), msg("Bob", "", 9)];
        let avg = avg_message_length(&messages);
        assert!((avg["Alice"] - 3.0).abs() < f64::EPSILON);
        assert!(avg["Bob"].abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_input() {
        assert!(message_counts(&[]).is_empty());
        assert!(word_counts(&[]).is_empty());
        assert!(most_active_hour(&[]).is_empty());
        assert_eq!(morning_evening(&[]), MorningEvening::default());
        assert!(avg_message_length(&[]).is_empty());
    }
}
