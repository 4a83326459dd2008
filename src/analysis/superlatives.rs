//! Single-message views: longest by characters, longest by words, first.

use super::report::{FirstMessage, LongestByChar, LongestByWord};
use crate::message::Message;

/// First message with the largest `key`, in extraction order.
fn first_max_by<F>(messages: &[Message], key: F) -> Option<&Message>
where
    F: Fn(&Message) -> usize,
{
    messages.iter().fold(None, |best, msg| match best {
        Some(b) if key(b) >= key(msg) => Some(b),
        _ => Some(msg),
    })
}

/// Truncates to `max_chars` code points. No ellipsis.
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

pub fn longest_by_char(messages: &[Message], preview_chars: usize) -> LongestByChar {
    first_max_by(messages, |m| m.char_count)
        .map(|msg| LongestByChar {
            sender: Some(msg.sender.clone()),
            char_count: Some(msg.char_count),
            preview: Some(preview(&msg.text, preview_chars)),
            full: Some(msg.text.clone()),
        })
        .unwrap_or_default()
}

pub fn longest_by_word(messages: &[Message], preview_chars: usize) -> LongestByWord {
    first_max_by(messages, |m| m.word_count)
        .map(|msg| LongestByWord {
            sender: Some(msg.sender.clone()),
            word_count: Some(msg.word_count),
            preview: Some(preview(&msg.text, preview_chars)),
            full: Some(msg.text.clone()),
        })
        .unwrap_or_default()
}

/// Earliest message by timestamp; on equal timestamps the first extracted.
pub fn first_message(messages: &[Message]) -> FirstMessage {
    messages
        .iter()
        .min_by_key(|m| m.timestamp)
        .map(|msg| FirstMessage {
            sender: Some(msg.sender.clone()),
            message: Some(msg.text.clone()),
            timestamp: Some(msg.timestamp),
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg(sender: &str, text: &str, day: u32) -> Message {
        let ts = NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Message::new(sender, text, ts)
    }

    #[test]
    fn test_longest_by_char_first_wins_ties() {
        let messages = vec![
            msg("Alice", "abc", 1),
            msg("Bob", "xyz", 2),
            msg("Carol", "ab", 3),
        ];
        let longest = longest_by_char(&messages, 200);
        assert_eq!(longest.sender.as_deref(), Some("Alice"));
        assert_eq!(longest.char_count, Some(3));
    }

    #[test]
    fn test_longest_by_word_independent_of_char() {
        let messages = vec![
            msg("Alice", "supercalifragilistic", 1),
            msg("Bob", "a b c", 2),
        ];
        assert_eq!(longest_by_char(&messages, 200).sender.as_deref(), Some("Alice"));
        let by_word = longest_by_word(&messages, 200);
        assert_eq!(by_word.sender.as_deref(), Some("Bob"));
        assert_eq!(by_word.word_count, Some(3));
    }

    #[test]
    fn test_preview_truncates_code_points() {
        let text = "é".repeat(250);
        let messages = vec![msg("Alice", &text, 1)];
        let longest = longest_by_char(&messages, 200);
        assert_eq!(longest.preview.as_ref().unwrap().chars().count(), 200);
        assert_eq!(longest.full.as_deref(), Some(text.as_str()));
        assert_eq!(longest.char_count, Some(250));
    }

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("hi", 200), "hi");
        assert_eq!(preview("hello", 0), "");
    }

    #[test]
    fn test_first_message_is_chronological() {
        let messages = vec![msg("Bob", "later", 5), msg("Alice", "earlier", 2)];
        let first = first_message(&messages);
        assert_eq!(first.sender.as_deref(), Some("Alice"));
        assert_eq!(first.message.as_deref(), Some("earlier"));
    }

    #[test]
    fn test_first_message_tie_keeps_extraction_order() {
        let messages = vec![msg("Bob", "one", 2), msg("Alice", "two", 2)];
        assert_eq!(first_message(&messages).sender.as_deref(), Some("Bob"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(longest_by_char(&[], 200), LongestByChar::default());
        assert_eq!(longest_by_word(&[], 200), LongestByWord::default());
        assert_eq!(first_message(&[]), FirstMessage::default());
    }
}
