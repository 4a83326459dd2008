//! Keyword and swear-word tallies.
//!
//! Keywords match anywhere in the text ("my photos" mentions "photo").
//! Swear words only match as whole words ("shitty" does not count).

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};

use super::report::{TermCounts, TermTally};
use crate::error::{ChatStatsError, Result};
use crate::message::Message;

#[derive(Debug, Clone)]
enum Matcher {
    /// Lowercased needle
    Substring(String),
    WholeWord(Regex),
}

/// One search term and how it matches.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: String,
    matcher: Matcher,
}

impl TermMatcher {
    /// Case-insensitive substring match.
    pub fn substring(term: impl Into<String>) -> Self {
        let term = term.into();
        Self {
            matcher: Matcher::Substring(term.to_lowercase()),
            term,
        }
    }

    /// Case-insensitive match bounded by word boundaries on both sides.
    pub fn whole_word(term: impl Into<String>) -> Result<Self> {
        let term = term.into();
        let regex = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(&term)))
            .case_insensitive(true)
            .build()
            .map_err(|e| ChatStatsError::pattern(term.clone(), e))?;
        Ok(Self {
            term,
            matcher: Matcher::WholeWord(regex),
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// `lowered` must be `text.to_lowercase()`.
    fn is_match(&self, text: &str, lowered: &str) -> bool {
        match &self.matcher {
            Matcher::Substring(needle) => lowered.contains(needle.as_str()),
            Matcher::WholeWord(regex) => regex.is_match(text),
        }
    }
}

/// Counts, per term and per sender, the messages matching each term.
///
/// Every sender in `messages` appears under every term, with zero when none
/// of their messages match.
pub fn tally(messages: &[Message], matchers: &[TermMatcher]) -> TermTally {
    let zeroed: BTreeMap<String, usize> = messages
        .iter()
        .map(|m| (m.sender.clone(), 0))
        .collect();

    let mut tally: Vec<TermCounts> = matchers
        .iter()
        .map(|m| TermCounts {
            term: m.term.clone(),
            counts: zeroed.clone(),
        })
        .collect();

    for msg in messages {
        let lowered = msg.text.to_lowercase();
        for (matcher, entry) in matchers.iter().zip(tally.iter_mut()) {
            if matcher.is_match(&msg.text, &lowered) {
                *entry.counts.entry(msg.sender.clone()).or_insert(0) += 1;
            }
        }
    }

    TermTally(tally)
}
