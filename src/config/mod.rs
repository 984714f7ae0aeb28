//! Configuration types for budget-diff operations.
//!
//! Structured configuration for the diff and view commands, constructed
//! from CLI arguments in `main` and handed to the command handlers.

use crate::reports::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The two snapshot files of a diff, older first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffPaths {
    /// Older snapshot
    pub old: PathBuf,
    /// Newer snapshot
    pub new: PathBuf,
}

/// Output configuration (format, file, colors).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Write the report here instead of stdout
    pub file: Option<PathBuf>,
    /// Disable ANSI colors
    pub no_color: bool,
}

/// Behavior flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress progress logging
    pub quiet: bool,
    /// Exit non-zero when the diff detects any change
    pub fail_on_change: bool,
}

/// Display labels for the two snapshots, typically backup dates.
///
/// When unset, the file stems are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLabels {
    pub old: Option<String>,
    pub new: Option<String>,
}

/// Full configuration for the diff command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Input files
    pub paths: DiffPaths,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Snapshot display labels
    pub labels: ReportLabels,
}

impl DiffConfig {
    /// Label for the older snapshot, falling back to its file stem.
    #[must_use]
    pub fn old_label(&self) -> String {
        self.labels
            .old
            .clone()
            .unwrap_or_else(|| file_stem(&self.paths.old))
    }

    /// Label for the newer snapshot, falling back to its file stem.
    #[must_use]
    pub fn new_label(&self) -> String {
        self.labels
            .new
            .clone()
            .unwrap_or_else(|| file_stem(&self.paths.new))
    }
}

/// Full configuration for the view command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Snapshot file
    pub path: PathBuf,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Display label, falling back to the file stem
    pub label: Option<String>,
}

impl ViewConfig {
    /// Display label for the snapshot.
    #[must_use]
    pub fn display_label(&self) -> String {
        self.label.clone().unwrap_or_else(|| file_stem(&self.path))
    }
}

fn file_stem(path: &std::path::Path) -> String {
    path.file_stem()
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned())
}
