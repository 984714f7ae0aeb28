//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{format_delta, format_money, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, FieldChange, FieldValue};
use crate::model::{LineItem, Snapshot};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output.
pub struct SummaryReporter {
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output.
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn item_line(&self, marker: &str, color: &str, item: &LineItem) -> String {
        let code = if item.cost_code.is_empty() {
            String::new()
        } else {
            format!(" [{}]", item.cost_code)
        };
        format!(
            "  {} {}{}  cost {}  price {}",
            self.color(marker, color),
            item.display_name(),
            code,
            format_money(item.extended_cost.unwrap_or(0.0)),
            format_money(item.extended_price.unwrap_or(0.0)),
        )
    }

    fn change_line(change: &FieldChange) -> String {
        // Descriptions can run long; the report only notes that they moved
        if change.field == "description" {
            return "      Description: (changed)".to_string();
        }

        let render = |value: &FieldValue| {
            if change.is_currency {
                if let FieldValue::Number(n) = value {
                    return format_money(*n);
                }
            }
            value.display()
        };

        let mut line = format!(
            "      {}: {} → {}",
            change.label,
            render(&change.old_value),
            render(&change.new_value),
        );
        if let Some(delta) = change.delta {
            line.push_str(&format!(" (Δ {})", format_delta(delta)));
        }
        line
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        old: &Snapshot,
        new: &Snapshot,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let summary = &result.summary;

        lines.push(self.color("Budget Diff Summary", "bold"));
        lines.push(self.color(&"─".repeat(40), "dim"));
        lines.push(format!(
            "{}  {} → {}",
            self.color("Backups:", "cyan"),
            config.old_label,
            config.new_label
        ));
        lines.push(format!(
            "{}    {} → {} items",
            self.color("Items:", "cyan"),
            old.item_count(),
            new.item_count()
        ));
        lines.push(String::new());

        lines.push(self.color("Totals:", "bold"));
        lines.push(format!(
            "  Cost:   {} → {} ({})",
            format_money(summary.old_total_cost),
            format_money(summary.new_total_cost),
            format_delta(summary.cost_change)
        ));
        lines.push(format!(
            "  Price:  {} → {} ({})",
            format_money(summary.old_total_price),
            format_money(summary.new_total_price),
            format_delta(summary.price_change)
        ));
        lines.push(String::new());

        if !result.has_changes() {
            lines.push(self.color("No changes detected", "green"));
            lines.push(String::new());
            return Ok(lines.join("\n"));
        }

        lines.push(self.color("Changes:", "bold"));
        if summary.added_count > 0 {
            lines.push(format!(
                "  {} {} added ({} cost)",
                self.color("+", "green"),
                summary.added_count,
                format_money(summary.added_cost)
            ));
        }
        if summary.removed_count > 0 {
            lines.push(format!(
                "  {} {} removed ({} cost)",
                self.color("-", "red"),
                summary.removed_count,
                format_money(summary.removed_cost)
            ));
        }
        if summary.modified_count > 0 {
            lines.push(format!(
                "  {} {} modified (cost Δ {})",
                self.color("~", "yellow"),
                summary.modified_count,
                format_delta(summary.modified_cost_delta)
            ));
        }
        lines.push(String::new());

        if !result.added.is_empty() {
            lines.push(self.color("Added:", "green"));
            for item in &result.added {
                lines.push(self.item_line("+", "green", item));
            }
            lines.push(String::new());
        }

        if !result.removed.is_empty() {
            lines.push(self.color("Removed:", "red"));
            for item in &result.removed {
                lines.push(self.item_line("-", "red", item));
            }
            lines.push(String::new());
        }

        if !result.modified.is_empty() {
            lines.push(self.color("Modified:", "yellow"));
            for modified in &result.modified {
                lines.push(format!(
                    "  {} {}",
                    self.color("~", "yellow"),
                    modified.item.display_name()
                ));
                for change in &modified.changes {
                    lines.push(Self::change_line(change));
                }
            }
            lines.push(String::new());
        }

        Ok(lines.join("\n"))
    }

    fn generate_view_report(
        &self,
        snapshot: &Snapshot,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let summary = snapshot.summary();
        let mut lines = Vec::new();

        lines.push(self.color("Budget Snapshot", "bold"));
        lines.push(self.color(&"─".repeat(40), "dim"));
        lines.push(format!(
            "{}  {}",
            self.color("Backup:", "cyan"),
            config.new_label
        ));
        lines.push(format!(
            "{}   {} ({} leaf items)",
            self.color("Items:", "cyan"),
            snapshot.item_count(),
            summary.item_count
        ));
        lines.push(format!(
            "{}   {}",
            self.color("Cost:", "cyan"),
            format_money(summary.total_cost)
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Price:", "cyan"),
            format_money(summary.total_price)
        ));
        if !summary.cost_types.is_empty() {
            lines.push(format!(
                "{}   {}",
                self.color("Types:", "cyan"),
                summary.cost_types.join(", ")
            ));
        }
        lines.push(String::new());

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
