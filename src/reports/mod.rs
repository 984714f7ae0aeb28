//! Report generation for diff results.
//!
//! This module provides the output formats for snapshot diff results:
//! - JSON: structured data for programmatic integration
//! - Markdown: human-readable documentation
//! - Summary: compact shell-friendly output
//!
//! Every reporter implements [`ReportGenerator`] for both the two-snapshot
//! diff report and the single-snapshot view report.

mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat};

use crate::diff::DiffResult;
use crate::model::Snapshot;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators.
pub trait ReportGenerator {
    /// Generate a report from a diff result.
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        old: &Snapshot,
        new: &Snapshot,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Generate a report for a single snapshot (view mode).
    fn generate_view_report(
        &self,
        snapshot: &Snapshot,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write a diff report to a writer.
    fn write_diff_report(
        &self,
        result: &DiffResult,
        old: &Snapshot,
        new: &Snapshot,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_diff_report(result, old, new, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// The format this generator produces.
    fn format(&self) -> ReportFormat;
}

/// Construct the reporter for a format.
///
/// `colored` only affects the plain-text summary; structured formats
/// ignore it.
#[must_use]
pub fn reporter_for(format: ReportFormat, colored: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary if colored => Box::new(SummaryReporter::new()),
        ReportFormat::Summary => Box::new(SummaryReporter::new().no_color()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

/// Format an amount as currency for plain-text and Markdown reports.
pub(crate) fn format_money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${value:.2}")
    }
}

/// Format a signed delta, keeping the sign visible.
pub(crate) fn format_delta(value: f64) -> String {
    format!("{value:+.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "$1234.50");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-300.0), "-$300.00");
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(100.0), "+100.00");
        assert_eq!(format_delta(-2.5), "-2.50");
    }

    #[test]
    fn test_reporter_for_matches_format() {
        for format in [ReportFormat::Summary, ReportFormat::Json, ReportFormat::Markdown] {
            assert_eq!(reporter_for(format, false).format(), format);
        }
    }
}
