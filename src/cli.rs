//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! [`Args::analysis_config`] turns the parsed arguments into the
//! [`AnalysisConfig`] handed to the pipeline.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;

/// Compute per-participant statistics from a WhatsApp chat export.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats chat.txt
    chatstats chat.txt -o report.html
    chatstats chat.txt -f html > report.html
    cat chat.txt | chatstats - --keyword sticker")]
pub struct Args {
    /// Path to the exported chat (use '-' for stdin)
    pub input: String,

    /// Path to output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (inferred from the output extension if omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Reject inputs larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_size: Option<usize>,

    /// Characters kept in longest-message previews
    #[arg(long, value_name = "N")]
    pub preview_chars: Option<usize>,

    /// Extra keyword to count by substring match (repeatable)
    #[arg(long = "keyword", value_name = "TEXT")]
    pub keywords: Vec<String>,

    /// Extra word to count by whole-word match (repeatable)
    #[arg(long = "swear-word", value_name = "WORD")]
    pub swear_words: Vec<String>,
}

impl Args {
    /// Builds the analysis configuration for these arguments.
    pub fn analysis_config(&self) -> AnalysisConfig {
        let mut config = AnalysisConfig::new();
        if let Some(max) = self.max_size {
            config = config.with_max_input_bytes(max);
        }
        if let Some(chars) = self.preview_chars {
            config = config.with_preview_chars(chars);
        }
        for keyword in &self.keywords {
            config = config.with_keyword(keyword.clone());
        }
        for word in &self.swear_words {
            config = config.with_swear_word(word.clone());
        }
        config
    }

    /// Resolves the output format: explicit flag, then output extension, then JSON.
    pub fn resolved_format(&self) -> crate::format::OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        self.output
            .as_deref()
            .and_then(|path| crate::format::OutputFormat::from_path(path).ok())
            .unwrap_or_default()
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON object with every view (default)
    #[default]
    Json,

    /// HTML page with nested lists
    Html,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Html => write!(f, "HTML"),
        }
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Html => crate::format::OutputFormat::Html,
        }
    }
}
