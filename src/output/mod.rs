//! Report writers.
//!
//! - [`write_json`] / [`to_json`] - the report as one JSON object
//! - [`write_html`] / [`to_html`] - the report as a readable HTML page
//!
//! Both have an error counterpart ([`error_json`], [`error_html`]) used when
//! the pipeline fails and there is no report to render.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatstats::output::{to_json, write_html};
//!
//! let report = chatstats::analyze_str("[1/1/2024, 09:00:00] Alice: hello")?;
//!
//! let json = to_json(&report)?;
//! write_html(&report, "report.html")?;
//! # Ok::<(), chatstats::ChatStatsError>(())
//! ```

mod html_writer;
mod json_writer;

pub use html_writer::{error_html, to_html, write_html};
pub use json_writer::{error_json, to_json, write_json};
