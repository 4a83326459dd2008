//! Configuration for a single analysis run.
//!
//! [`AnalysisConfig`] is a plain value passed into the pipeline; nothing in the
//! library reads process-wide state.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::new()
//!     .with_max_input_bytes(8 * 1024 * 1024)
//!     .with_keyword("sticker");
//!
//! assert!(config.keywords.iter().any(|k| k == "sticker"));
//! ```

use serde::{Deserialize, Serialize};

/// Keywords tallied by substring match unless overridden.
pub const DEFAULT_KEYWORDS: &[&str] = &["changed the group name", "photo", "video", "gif"];

/// Words tallied by whole-word match unless overridden.
pub const DEFAULT_SWEAR_WORDS: &[&str] = &["shit", "fuck", "cunt", "sexotheque"];

/// Configuration for chat export analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Largest accepted input in bytes (default: 50MB)
    pub max_input_bytes: usize,

    /// Length of the longest-message previews, in characters (default: 200)
    pub preview_chars: usize,

    /// Terms counted by case-insensitive substring match
    pub keywords: Vec<String>,

    /// Terms counted by case-insensitive whole-word match
    pub swear_words: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: 50 * 1024 * 1024, // 50MB
            preview_chars: 200,
            keywords: DEFAULT_KEYWORDS.iter().map(|s| (*s).to_string()).collect(),
            swear_words: DEFAULT_SWEAR_WORDS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum input size in bytes.
    #[must_use]
    pub fn with_max_input_bytes(mut self, size: usize) -> Self {
        self.max_input_bytes = size;
        self
    }

    /// Sets the preview length for the longest-message views.
    #[must_use]
    pub fn with_preview_chars(mut self, chars: usize) -> Self {
        self.preview_chars = chars;
        self
    }

    /// Appends a keyword to the substring tally.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Replaces the keyword list.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a word to the whole-word tally.
    #[must_use]
    pub fn with_swear_word(mut self, word: impl Into<String>) -> Self {
        self.swear_words.push(word.into());
        self
    }

    /// Replaces the whole-word list.
    #[must_use]
    pub fn with_swear_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.swear_words = words.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.max_input_bytes, 50 * 1024 * 1024);
        assert_eq!(config.preview_chars, 200);
        assert_eq!(
            config.keywords,
            vec!["changed the group name", "photo", "video", "gif"]
        );
        assert_eq!(config.swear_words, vec!["shit", "fuck", "cunt", "sexotheque"]);
    }

    #[test]
    fn test_builder() {
        let config = AnalysisConfig::new()
            .with_max_input_bytes(1024)
            .with_preview_chars(10)
            .with_keywords(["audio"])
            .with_swear_word("darn");

        assert_eq!(config.max_input_bytes, 1024);
        assert_eq!(config.preview_chars, 10);
        assert_eq!(config.keywords, vec!["audio"]);
        assert_eq!(config.swear_words.last().map(String::as_str), Some("darn"));
    }

    #[test]
    fn test_config_serde() {
        let config = AnalysisConfig::new().with_preview_chars(50);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_serde_partial() {
        let parsed: AnalysisConfig = serde_json::from_str(r#"{"preview_chars": 80}"#).unwrap();
        assert_eq!(parsed.preview_chars, 80);
        assert_eq!(parsed.keywords.len(), 4);
    }
}
