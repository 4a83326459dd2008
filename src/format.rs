//! Output format selection.
//!
//! # Example
//!
//! ```rust
//! use chatstats::format::OutputFormat;
//!
//! let format = OutputFormat::from_path("report.html").unwrap();
//! assert_eq!(format, OutputFormat::Html);
//! assert_eq!(format.mime_type(), "text/html");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ChatStatsError;

#[cfg(feature = "output")]
use crate::analysis::Report;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// One JSON object with the twelve views
    #[default]
    Json,

    /// Standalone HTML page of nested lists
    Html,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "html", "htm"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Html]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Html => "text/html",
        }
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &str) -> Result<Self, ChatStatsError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "html" | "htm" => Ok(OutputFormat::Html),
            _ => Err(ChatStatsError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: json, html",
                    ext
                ),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Html => write!(f, "HTML"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "html" | "htm" => Ok(OutputFormat::Html),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders the report in the specified format.
#[cfg(feature = "output")]
pub fn to_format_string(report: &Report, format: OutputFormat) -> Result<String, ChatStatsError> {
    match format {
        OutputFormat::Json => crate::output::to_json(report),
        OutputFormat::Html => crate::output::to_html(report),
    }
}

/// Writes the report to a file in the specified format.
#[cfg(feature = "output")]
pub fn write_to_format(
    report: &Report,
    path: &str,
    format: OutputFormat,
) -> Result<(), ChatStatsError> {
    match format {
        OutputFormat::Json => crate::output::write_json(report, path),
        OutputFormat::Html => crate::output::write_html(report, path),
    }
}

/// Renders the error mapping in the specified format.
#[cfg(feature = "output")]
pub fn error_string(message: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => crate::output::error_json(message),
        OutputFormat::Html => crate::output::error_html(message),
    }
}
