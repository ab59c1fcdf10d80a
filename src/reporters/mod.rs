//! Output reporters for encscore results
//!
//! Supports two formats:
//! - `text` - Human-readable terminal report
//! - `json` - Machine-readable JSON
//!
//! Both render the same `ScoreResult`; scoring never branches on format.

mod json;
mod text;

use crate::models::ScoreResult;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Presentation switches that do not change the data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Decorate the text header with emoji
    pub emoji: bool,
    /// Append the per-term score breakdown
    pub explain: bool,
    /// Allow ANSI styling (still subject to terminal detection)
    pub color: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            emoji: true,
            explain: false,
            color: true,
        }
    }
}

/// Render a single score result using an OutputFormat enum
pub fn report_with_format(
    result: &ScoreResult,
    format: OutputFormat,
    options: ReportOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(result, options),
        OutputFormat::Json => json::render(result),
    }
}

/// Render a ranked comparison of several models
pub fn report_comparison(
    results: &[ScoreResult],
    format: OutputFormat,
    options: ReportOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_comparison(results, options),
        OutputFormat::Json => json::render_comparison(results),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::{Enhancements, ScoringParameters};

    /// The published zama-fhe example
    pub(crate) fn test_result() -> ScoreResult {
        let model = catalog::lookup("zama-fhe").unwrap();
        let params = ScoringParameters::new(12_000.0, 0.4).with_enhancements(Enhancements {
            fhe: true,
            ..Default::default()
        });
        crate::scoring::score(model, &params).unwrap()
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("txt").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_format_display_round_trips() {
        for fmt in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(OutputFormat::from_str(&fmt.to_string()).unwrap(), fmt);
        }
    }

    #[test]
    fn test_report_dispatch() {
        let result = test_result();
        let text = report_with_format(&result, OutputFormat::Text, ReportOptions::default()).unwrap();
        assert!(console::strip_ansi_codes(&text).contains("Final Score: 0.3721"));
        let json = report_with_format(&result, OutputFormat::Json, ReportOptions::default()).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }
}
