//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatStatsError`] enum that covers every
//! pipeline-level failure in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Row-level problems** (a line that is not a message, a timestamp that
//!   does not parse) are never errors. The parser skips them silently.
//! - **Pipeline-level problems** (undecodable input, oversized input, a bad
//!   search term) abort the whole analysis with one of the variants below.
//!   No partial report is ever returned alongside an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::Report;
///
/// fn my_function() -> Result<Report> {
///     chatstats::analyze_str("")
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatStatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatStatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The report cannot be written
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input could not be decoded as UTF-8 text.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The input exceeds the configured size bound.
    #[error("Input too large: {actual_size} bytes (maximum: {max_size} bytes){}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    InputTooLarge {
        /// Maximum allowed size in bytes
        max_size: usize,
        /// Actual size encountered
        actual_size: usize,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A configured keyword or swear word produced an unusable pattern.
    #[error("Invalid search term '{term}': {source}")]
    Pattern {
        /// The term as configured
        term: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// The requested output format is unknown or unavailable.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// JSON serialization error.
    #[cfg(feature = "output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatStatsError {
    /// Creates a decoding error for input read from `context`.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatStatsError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates an input-size error.
    pub fn input_too_large(max_size: usize, actual_size: usize, path: Option<PathBuf>) -> Self {
        ChatStatsError::InputTooLarge {
            max_size,
            actual_size,
            path,
        }
    }

    /// Creates a pattern error for a configured search term.
    pub fn pattern(term: impl Into<String>, source: regex::Error) -> Self {
        ChatStatsError::Pattern {
            term: term.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatStatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatStatsError::Io(_))
    }

    /// Returns `true` if the input could not be decoded.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatStatsError::Utf8 { .. })
    }

    /// Returns `true` if the input exceeded the size bound.
    pub fn is_input_too_large(&self) -> bool {
        matches!(self, ChatStatsError::InputTooLarge { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatStatsError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatStatsError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
        assert!(err.is_io());
    }

    #[test]
    fn test_utf8_error_display() {
        let bad = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = ChatStatsError::utf8("upload", bad);
        assert!(err.to_string().contains("upload"));
        assert!(err.is_utf8());
    }

    #[test]
    fn test_input_too_large_with_path() {
        let err = ChatStatsError::input_too_large(10, 20, Some(PathBuf::from("/tmp/chat.txt")));
        let display = err.to_string();
        assert!(display.contains("20 bytes"));
        assert!(display.contains("maximum: 10"));
        assert!(display.contains("/tmp/chat.txt"));
        assert!(err.is_input_too_large());
    }

    #[test]
    fn test_input_too_large_without_path() {
        let err = ChatStatsError::input_too_large(10, 20, None);
        assert!(!err.to_string().contains("file:"));
    }

    #[test]
    fn test_pattern_error_display() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = ChatStatsError::pattern("(", source);
        assert!(err.to_string().contains("Invalid search term '('"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatStatsError::invalid_format("output", "Unknown file extension: '.txt'");
        assert_eq!(
            err.to_string(),
            "Invalid output format: Unknown file extension: '.txt'"
        );
        assert!(err.is_invalid_format());
        assert!(!err.is_io());
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let bad = String::from_utf8(vec![0xc3]).unwrap_err();
        let err = ChatStatsError::utf8("stdin", bad);
        assert!(err.source().is_some());
    }
}
