//! End-to-end analysis: raw export in, [`Report`] out.
//!
//! [`ChatAnalyzer`] owns an [`AnalysisConfig`] and runs extraction,
//! normalization and aggregation in one synchronous pass. Input is bounded
//! by `max_input_bytes` before any parsing happens.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatstats::pipeline::ChatAnalyzer;
//!
//! let analyzer = ChatAnalyzer::new();
//! let report = analyzer.analyze_file("whatsapp_chat.txt".as_ref())?;
//! println!("{} messages", report.total_messages());
//! # Ok::<(), chatstats::ChatStatsError>(())
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::analysis::{Aggregator, Report};
use crate::config::AnalysisConfig;
use crate::error::{ChatStatsError, Result};
use crate::parsing::parse_messages;

/// Runs the full pipeline under one configuration.
#[derive(Debug, Clone, Default)]
pub struct ChatAnalyzer {
    config: AnalysisConfig,
}

impl ChatAnalyzer {
    /// Creates an analyzer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with custom configuration.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyzes already-decoded export text.
    pub fn analyze_str(&self, text: &str) -> Result<Report> {
        self.check_size(text.len(), None)?;
        let aggregator = Aggregator::new(&self.config)?;
        let messages = parse_messages(text);
        Ok(aggregator.analyze(&messages))
    }

    /// Decodes `bytes` as UTF-8 and analyzes them.
    pub fn analyze_bytes(&self, bytes: Vec<u8>) -> Result<Report> {
        self.check_size(bytes.len(), None)?;
        let text = String::from_utf8(bytes).map_err(|e| ChatStatsError::utf8("input", e))?;
        self.analyze_str(&text)
    }

    /// Reads at most `max_input_bytes` from `reader` and analyzes them.
    ///
    /// Fails without analyzing anything if the reader holds more.
    pub fn analyze_reader<R: Read>(&self, reader: R) -> Result<Report> {
        let limit = self.config.max_input_bytes as u64;
        let mut bytes = Vec::new();
        reader.take(limit.saturating_add(1)).read_to_end(&mut bytes)?;
        self.check_size(bytes.len(), None)?;

        let text = String::from_utf8(bytes).map_err(|e| ChatStatsError::utf8("input stream", e))?;
        self.analyze_str(&text)
    }

    /// Reads and analyzes an export file.
    pub fn analyze_file(&self, path: &Path) -> Result<Report> {
        let file = File::open(path)?;
        let size = usize::try_from(file.metadata()?.len()).unwrap_or(usize::MAX);
        self.check_size(size, Some(path))?;

        tracing::debug!(path = %path.display(), bytes = size, "reading export");

        let mut bytes = Vec::with_capacity(size);
        file.take(self.config.max_input_bytes as u64 + 1)
            .read_to_end(&mut bytes)?;
        self.check_size(bytes.len(), Some(path))?;

        let text = String::from_utf8(bytes)
            .map_err(|e| ChatStatsError::utf8(path.display().to_string(), e))?;
        self.analyze_str(&text)
    }

    fn check_size(&self, actual: usize, path: Option<&Path>) -> Result<()> {
        if actual > self.config.max_input_bytes {
            return Err(ChatStatsError::input_too_large(
                self.config.max_input_bytes,
                actual,
                path.map(Path::to_path_buf),
            ));
        }
        Ok(())
    }
}

/// Analyzes export text with the default configuration.
///
/// # Example
///
/// ```rust
/// let report = chatstats::analyze_str("[1/1/2024, 09:00:00] Alice: hello")?;
/// assert_eq!(report.message_count("Alice"), 1);
/// # Ok::<(), chatstats::ChatStatsError>(())
/// ```
pub fn analyze_str(text: &str) -> Result<Report> {
    ChatAnalyzer::new().analyze_str(text)
}

/// Analyzes an export file with the default configuration.
pub fn analyze_file(path: impl AsRef<Path>) -> Result<Report> {
    ChatAnalyzer::new().analyze_file(path.as_ref())
}
