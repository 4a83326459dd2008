//! Gap views.
//!
//! Two different timelines are measured here and must not be merged:
//! - [`silence_broken`] measures each message against the previous message
//!   by anyone (global timeline), in hours
//! - [`absence_periods`] measures each sender against their own previous
//!   message (per-sender timeline), in minutes

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use super::report::{AbsencePeriod, SilenceBroken};
use crate::message::Message;

fn elapsed_secs(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_seconds() as f64
}

/// Messages in timestamp order. Equal timestamps keep extraction order.
pub fn time_ordered(messages: &[Message]) -> Vec<&Message> {
    let mut sorted: Vec<&Message> = messages.iter().collect();
    sorted.sort_by_key(|m| m.timestamp);
    sorted
}

/// For each sender, the longest global gap their messages ended.
///
/// The opening message of the chat has no predecessor; its gap is missing
/// and does not take part in the maximum.
pub fn silence_broken(sorted: &[&Message]) -> Vec<SilenceBroken> {
    let mut longest: BTreeMap<&str, Option<f64>> = BTreeMap::new();

    let mut previous: Option<NaiveDateTime> = None;
    for msg in sorted {
        let gap = previous.map(|prev| elapsed_secs(prev, msg.timestamp) / 3600.0);
        let slot = longest.entry(msg.sender.as_str()).or_insert(None);
        if let Some(gap) = gap {
            *slot = Some(slot.map_or(gap, |best| best.max(gap)));
        }
        previous = Some(msg.timestamp);
    }

    longest
        .into_iter()
        .map(|(name, gap)| SilenceBroken {
            name: name.to_string(),
            gap,
        })
        .collect()
}

/// For each sender with two or more messages, their own longest gap.
///
/// The first of several equal gaps wins.
pub fn absence_periods(sorted: &[&Message]) -> Vec<AbsencePeriod> {
    let mut own_timelines: BTreeMap<&str, Vec<NaiveDateTime>> = BTreeMap::new();
    for msg in sorted {
        own_timelines
            .entry(msg.sender.as_str())
            .or_default()
            .push(msg.timestamp);
    }

    own_timelines
        .into_iter()
        .filter_map(|(name, times)| {
            let mut best: Option<(f64, NaiveDateTime, NaiveDateTime)> = None;
            for pair in times.windows(2) {
                let minutes = elapsed_secs(pair[0], pair[1]) / 60.0;
                if best.is_none_or(|(longest, _, _)| minutes > longest) {
                    best = Some((minutes, pair[0], pair[1]));
                }
            }
            best.map(|(gap, absence_start, absence_end)| AbsencePeriod {
                name: name.to_string(),
                gap,
                absence_start,
                absence_end,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn msg(sender: &str, ts: NaiveDateTime) -> Message {
        Message::new(sender, "x", ts)
    }

    #[test]
    fn test_time_ordered_is_stable() {
        let messages = vec![
            msg("B", at(2, 9, 0)),
            msg("A", at(1, 9, 0)),
            msg("C", at(1, 9, 0)),
        ];
        let sorted = time_ordered(&messages);
        let names: Vec<_> = sorted.iter().map(|m| m.sender.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_silence_broken_uses_global_timeline() {
        let messages = vec![
            msg("Alice", at(1, 9, 0)),
            msg("Bob", at(1, 9, 5)),
            msg("Alice", at(1, 20, 0)),
        ];
        let sorted = time_ordered(&messages);
        let gaps = silence_broken(&sorted);

        assert_eq!(gaps[0].name, "Alice");
        let alice = gaps[0].gap.unwrap();
        assert!((alice - (10.0 + 55.0 / 60.0)).abs() < 1e-9);

        assert_eq!(gaps[1].name, "Bob");
        let bob = gaps[1].gap.unwrap();
        assert!((bob - 5.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_silence_broken_opening_message_is_missing() {
        let messages = vec![msg("Alice", at(1, 9, 0)), msg("Bob", at(1, 10, 0))];
        let sorted = time_ordered(&messages);
        let gaps = silence_broken(&sorted);
        assert_eq!(gaps[0].gap, None);
        assert_eq!(gaps[1].gap, Some(1.0));
    }

    #[test]
    fn test_absence_periods_use_own_timeline() {
        let messages = vec![
            msg("Alice", at(1, 9, 0)),
            msg("Bob", at(1, 9, 30)),
            msg("Alice", at(1, 10, 0)),
            msg("Alice", at(1, 13, 0)),
        ];
        let sorted = time_ordered(&messages);
        let periods = absence_periods(&sorted);

        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].name, "Alice");
        assert!((periods[0].gap - 180.0).abs() < f64::EPSILON);
        assert_eq!(periods[0].absence_start, at(1, 10, 0));
        assert_eq!(periods[0].absence_end, at(1, 13, 0));
    }

    #[test]
    fn test_absence_periods_first_max_wins() {
        let messages = vec![
            msg("Alice", at(1, 9, 0)),
            msg("Alice", at(1, 10, 0)),
            msg("Alice", at(1, 11, 0)),
        ];
        let sorted = time_ordered(&messages);
        let periods = absence_periods(&sorted);
        assert_eq!(periods[0].absence_start, at(1, 9, 0));
    }

    #[test]
    fn test_absence_periods_single_message_no_entry() {
        let messages = vec![msg("Alice", at(1, 9, 0))];
        let sorted = time_ordered(&messages);
        assert!(absence_periods(&sorted).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(silence_broken(&[]).is_empty());
        assert!(absence_periods(&[]).is_empty());
    }
}
