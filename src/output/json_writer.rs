//! JSON output writer.

use std::fs::File;
use std::io::Write;

use serde_json::json;

use crate::analysis::Report;
use crate::error::Result;

/// Writes the report to a JSON file.
///
/// # Format
/// ```json
/// {
///   "message_counts": [{"Name": "Alice", "message_count": 2}],
///   "word_counts": [{"Name": "Alice", "word_count": 4}],
///   ...
/// }
/// ```
pub fn write_json(report: &Report, output_path: &str) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the report to a pretty-printed JSON string.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// The error mapping returned in place of a report: `{"error": "..."}`.
pub fn error_json(message: &str) -> String {
    json!({ "error": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::parsing::parse_messages;
    use tempfile::NamedTempFile;

    #[test]
    fn test_to_json_has_twelve_keys_in_order() {
        let report = analyze(&parse_messages("[1/1/2024, 09:00:00] Alice: hello"));
        let json = to_json(&report).unwrap();

        let keys = [
            "message_counts",
            "word_counts",
            "most_active_hour",
            "longest_gap_hours",
            "absence_periods",
            "morning_evening",
            "avg_message_length",
            "longest_message_by_char",
            "longest_message_by_word",
            "keyword_mentions",
            "first_message",
            "swear_word_counts",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| json.find(&format!("\"{k}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.contains(r#""timestamp": "2024-01-01T09:00:00""#));
    }

    #[test]
    fn test_write_json() {
        let report = analyze(&parse_messages("[1/1/2024, 09:00:00] Alice: hello"));
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_json(&report, path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["message_counts"][0]["Name"], "Alice");
    }

    #[test]
    fn test_error_json() {
        assert_eq!(error_json("boom \"x\""), r#"{"error":"boom \"x\""}"#);
    }
}
