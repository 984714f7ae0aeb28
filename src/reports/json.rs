//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, DiffSummary, ModifiedItem};
use crate::model::{BudgetTree, LineItem, Snapshot, SnapshotSummary};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator.
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter (pretty-printed by default).
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing.
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn serialize<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let out = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        out.map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

impl ToolInfo {
    fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Serialize)]
struct DiffReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    old_label: String,
    new_label: String,
    old_item_count: usize,
    new_item_count: usize,
}

#[derive(Serialize)]
struct JsonDiffReport<'a> {
    metadata: DiffReportMetadata,
    has_changes: bool,
    summary: &'a DiffSummary,
    added: &'a [LineItem],
    removed: &'a [LineItem],
    modified: &'a [ModifiedItem],
}

#[derive(Serialize)]
struct ViewReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    label: String,
    item_count: usize,
}

#[derive(Serialize)]
struct JsonViewReport<'a> {
    metadata: ViewReportMetadata,
    summary: SnapshotSummary,
    tree: BudgetTree,
    items: &'a [LineItem],
}

impl ReportGenerator for JsonReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        old: &Snapshot,
        new: &Snapshot,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonDiffReport {
            metadata: DiffReportMetadata {
                tool: ToolInfo::current(),
                generated_at: Utc::now().to_rfc3339(),
                old_label: config.old_label.clone(),
                new_label: config.new_label.clone(),
                old_item_count: old.item_count(),
                new_item_count: new.item_count(),
            },
            has_changes: result.has_changes(),
            summary: &result.summary,
            added: &result.added,
            removed: &result.removed,
            modified: &result.modified,
        };
        self.serialize(&report)
    }

    fn generate_view_report(
        &self,
        snapshot: &Snapshot,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonViewReport {
            metadata: ViewReportMetadata {
                tool: ToolInfo::current(),
                generated_at: Utc::now().to_rfc3339(),
                label: config.new_label.clone(),
                item_count: snapshot.item_count(),
            },
            summary: snapshot.summary(),
            tree: BudgetTree::build(&snapshot.items),
            items: &snapshot.items,
        };
        self.serialize(&report)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
