//! Report type definitions.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ReportFormat {
    /// Compact plain-text summary for terminal use
    #[default]
    Summary,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Shared configuration for report generation.
///
/// The labels name the two snapshots in output — typically the backup
/// dates the caller fetched them by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Display label for the older snapshot
    pub old_label: String,
    /// Display label for the newer snapshot
    pub new_label: String,
}

impl ReportConfig {
    /// Config with the given display labels.
    #[must_use]
    pub fn with_labels(old_label: impl Into<String>, new_label: impl Into<String>) -> Self {
        Self {
            old_label: old_label.into(),
            new_label: new_label.into(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            old_label: "old".to_string(),
            new_label: "new".to_string(),
        }
    }
}
