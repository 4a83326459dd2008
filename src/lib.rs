//! # Chatstats
//!
//! Descriptive statistics for WhatsApp chat exports.
//!
//! ## Overview
//!
//! Chatstats reads the plain-text export of a chat and computes, per
//! participant and for the chat as a whole:
//! - message and word counts
//! - activity by hour of day, and by morning/evening
//! - gaps between messages and each participant's longest absence
//! - keyword and swear-word tallies
//! - the longest and the first message
//!
//! The pipeline has three stages, run synchronously:
//! 1. [`parsing::extract`] finds `[D/M/YYYY, H:MM:SS] Sender: Message` records
//! 2. [`parsing::normalize`] trims, filters system notices and parses dates
//! 3. [`analysis::Aggregator`] computes the twelve views of a [`Report`]
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let export = "[1/1/2024, 09:00:00] Alice: hello world\n\
//!                   [1/1/2024, 09:05:00] Bob: hi";
//!
//!     let report = analyze_str(export)?;
//!     assert_eq!(report.total_messages(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Known parsing limits
//!
//! Only the first physical line of a multi-line message is kept; the lines
//! that follow have no timestamp prefix and are skipped. Rows sent under the
//! name that posted the encryption notice are dropped, even if a real
//! participant shares that name.
//!
//! ## Module Structure
//!
//! - [`parsing`] - extraction and normalization
//! - [`analysis`] - aggregation and the [`Report`] types
//! - [`pipeline`] - [`ChatAnalyzer`](pipeline::ChatAnalyzer), bounded input handling
//! - [`config`] - [`AnalysisConfig`](config::AnalysisConfig)
//! - [`format`] / `output` - JSON and HTML rendering
//! - [`error`] - [`ChatStatsError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod message;
#[cfg(feature = "output")]
pub mod output;
pub mod parsing;
pub mod pipeline;

// Re-export the main types at the crate root for convenience
pub use analysis::Report;
pub use error::{ChatStatsError, Result};
pub use message::{Message, Period};
pub use pipeline::{analyze_file, analyze_str};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Message, Period, Report};

    pub use crate::error::{ChatStatsError, Result};

    pub use crate::config::AnalysisConfig;

    pub use crate::parsing::parse_messages;

    pub use crate::analysis::{Aggregator, analyze};

    pub use crate::pipeline::{ChatAnalyzer, analyze_file, analyze_str};

    pub use crate::format::OutputFormat;

    #[cfg(feature = "output")]
    pub use crate::output::{to_html, to_json, write_html, write_json};
}
