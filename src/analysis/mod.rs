//! Aggregation of parsed messages into a [`Report`].
//!
//! - [`activity`] - counts per sender, hour and period
//! - [`gaps`] - global and per-sender gap views
//! - [`superlatives`] - longest and first messages
//! - [`terms`] - keyword and swear-word tallies
//! - [`report`] - the report types
//!
//! # Example
//!
//! ```rust
//! use chatstats::analysis::analyze;
//! use chatstats::parsing::parse_messages;
//!
//! let messages = parse_messages(
//!     "[1/1/2024, 09:00:00] Alice: hello world\n\
//!      [1/1/2024, 09:05:00] Bob: hi\n\
//!      [1/1/2024, 20:00:00] Alice: good evening",
//! );
//! let report = analyze(&messages);
//!
//! assert_eq!(report.message_counts[0].name, "Alice");
//! assert_eq!(report.first_message.message.as_deref(), Some("hello world"));
//! ```

pub mod activity;
pub mod gaps;
pub mod report;
pub mod superlatives;
pub mod terms;

pub use report::{
    AbsencePeriod, FirstMessage, HourActivity, LongestByChar, LongestByWord, MorningEvening,
    Report, SenderMessageCount, SenderWordCount, SilenceBroken, TermCounts, TermTally,
};
pub use terms::TermMatcher;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::message::Message;

/// Computes reports with a fixed set of search terms.
#[derive(Debug, Clone)]
pub struct Aggregator {
    keywords: Vec<TermMatcher>,
    swear_words: Vec<TermMatcher>,
    preview_chars: usize,
}

impl Aggregator {
    /// Builds an aggregator from `config`.
    ///
    /// Duplicate terms are counted once, under their first position.
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        let keywords = dedup(&config.keywords)
            .into_iter()
            .map(TermMatcher::substring)
            .collect();
        let swear_words = dedup(&config.swear_words)
            .into_iter()
            .map(TermMatcher::whole_word)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            keywords,
            swear_words,
            preview_chars: config.preview_chars,
        })
    }

    /// Computes every view over `messages`, which must be in extraction order.
    pub fn analyze(&self, messages: &[Message]) -> Report {
        let sorted = gaps::time_ordered(messages);

        let report = Report {
            message_counts: activity::message_counts(messages),
            word_counts: activity::word_counts(messages),
            most_active_hour: activity::most_active_hour(messages),
            longest_gap_hours: gaps::silence_broken(&sorted),
            absence_periods: gaps::absence_periods(&sorted),
            morning_evening: activity::morning_evening(messages),
            avg_message_length: activity::avg_message_length(messages),
            longest_message_by_char: superlatives::longest_by_char(messages, self.preview_chars),
            longest_message_by_word: superlatives::longest_by_word(messages, self.preview_chars),
            keyword_mentions: terms::tally(messages, &self.keywords),
            first_message: superlatives::first_message(messages),
            swear_word_counts: terms::tally(messages, &self.swear_words),
        };

        tracing::debug!(
            messages = messages.len(),
            senders = report.message_counts.len(),
            "computed report"
        );
        report
    }
}

fn dedup(terms: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(terms.len());
    for term in terms {
        if !seen.contains(term) {
            seen.push(term.clone());
        }
    }
    seen
}

/// Computes the report with the default search terms.
pub fn analyze(messages: &[Message]) -> Report {
    Aggregator::new(&AnalysisConfig::default())
        .expect("default search terms are valid patterns")
        .analyze(messages)
}
