//! Export line extraction.
//!
//! Recognizes the bracketed export shape:
//!
//! ```text
//! [D/M/YYYY, H:MM:SS] Sender: Message
//! ```
//!
//! Only physical lines that start with a bracketed timestamp are records.
//! Continuation lines of a multi-line message have no prefix and are skipped,
//! so only the first line of such a message is kept. Lines that do not match
//! never raise.

use std::sync::LazyLock;

use regex::Regex;

/// One record as matched, with every field borrowed from the input.
///
/// `sender` is everything between the closing bracket and the first colon,
/// untrimmed; it may carry a leading space and directional marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub sender: &'a str,
    pub text: &'a str,
}

// A line may begin with LRM/RLM marks before the bracket (attachment lines do),
// and the first line of a file may carry a byte order mark.
static EXPORT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[\x{FEFF}\x{200E}\x{200F}]*\[([0-9]{1,2}/[0-9]{1,2}/[0-9]{4}), ([0-9]{1,2}:[0-9]{2}:[0-9]{2})\]([^:\n]+): (.+)",
    )
    .expect("export line pattern is valid")
});

/// Scans `text` and yields every matched record in file order.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::extract;
///
/// let text = "[1/1/2024, 09:00:00] Alice: see https://example.com\n\
///             continuation without a prefix\n\
///             [1/1/2024, 09:05:00] Bob: hi";
/// let rows: Vec<_> = extract(text).collect();
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].sender, " Alice");
/// assert_eq!(rows[0].text, "see https://example.com");
/// ```
pub fn extract(text: &str) -> impl Iterator<Item = RawLine<'_>> + '_ {
    EXPORT_LINE.captures_iter(text).filter_map(|caps| {
        Some(RawLine {
            date: caps.get(1)?.as_str(),
            time: caps.get(2)?.as_str(),
            sender: caps.get(3)?.as_str(),
            text: caps.get(4)?.as_str(),
        })
    })
}
