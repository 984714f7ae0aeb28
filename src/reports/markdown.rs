//! Markdown report generator.

use super::{format_delta, format_money, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::DiffResult;
use crate::model::{LineItem, Snapshot, TreeNode};
use std::fmt::Write as _;

/// Markdown report generator.
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn item_row(out: &mut String, item: &LineItem) -> Result<(), ReportError> {
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            escape_markdown(&item.display_name()),
            escape_markdown(&item.cost_code),
            format_money(item.extended_cost.unwrap_or(0.0)),
            format_money(item.extended_price.unwrap_or(0.0)),
        )?;
        Ok(())
    }

    fn tree_lines(out: &mut String, node: &TreeNode, label: &str, depth: usize) -> Result<(), ReportError> {
        let indent = "  ".repeat(depth);
        writeln!(
            out,
            "{indent}- **{}** ({} items, {})",
            escape_markdown(label),
            node.item_count(),
            format_money(node.total_cost())
        )?;
        for item in &node.items {
            writeln!(
                out,
                "{indent}  - {} ({})",
                escape_markdown(&item.name),
                format_money(item.extended_cost.unwrap_or(0.0))
            )?;
        }
        for (child_label, child) in &node.children {
            Self::tree_lines(out, child, child_label, depth + 1)?;
        }
        Ok(())
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape characters Markdown would interpret inside table cells.
fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl ReportGenerator for MarkdownReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        old: &Snapshot,
        new: &Snapshot,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        let summary = &result.summary;

        writeln!(
            out,
            "# Budget Diff: {} → {}\n",
            escape_markdown(&config.old_label),
            escape_markdown(&config.new_label)
        )?;

        writeln!(out, "## Summary\n")?;
        writeln!(out, "| Metric | Old | New | Change |")?;
        writeln!(out, "|---|---|---|---|")?;
        writeln!(
            out,
            "| Items | {} | {} | |",
            old.item_count(),
            new.item_count()
        )?;
        writeln!(
            out,
            "| Total Cost | {} | {} | {} |",
            format_money(summary.old_total_cost),
            format_money(summary.new_total_cost),
            format_delta(summary.cost_change)
        )?;
        writeln!(
            out,
            "| Total Price | {} | {} | {} |",
            format_money(summary.old_total_price),
            format_money(summary.new_total_price),
            format_delta(summary.price_change)
        )?;
        writeln!(out)?;

        if !result.has_changes() {
            writeln!(out, "No changes detected.")?;
            return Ok(out);
        }

        if !result.added.is_empty() {
            writeln!(out, "## Added ({})\n", result.added.len())?;
            writeln!(out, "| Item | Cost Code | Extended Cost | Extended Price |")?;
            writeln!(out, "|---|---|---|---|")?;
            for item in &result.added {
                Self::item_row(&mut out, item)?;
            }
            writeln!(out)?;
        }

        if !result.removed.is_empty() {
            writeln!(out, "## Removed ({})\n", result.removed.len())?;
            writeln!(out, "| Item | Cost Code | Extended Cost | Extended Price |")?;
            writeln!(out, "|---|---|---|---|")?;
            for item in &result.removed {
                Self::item_row(&mut out, item)?;
            }
            writeln!(out)?;
        }

        if !result.modified.is_empty() {
            writeln!(out, "## Modified ({})\n", result.modified.len())?;
            for modified in &result.modified {
                writeln!(out, "### {}\n", escape_markdown(&modified.item.display_name()))?;
                writeln!(out, "| Field | Old | New | Delta |")?;
                writeln!(out, "|---|---|---|---|")?;
                for change in &modified.changes {
                    writeln!(
                        out,
                        "| {} | {} | {} | {} |",
                        escape_markdown(&change.label),
                        escape_markdown(&change.old_value.display()),
                        escape_markdown(&change.new_value.display()),
                        change.delta.map(format_delta).unwrap_or_default(),
                    )?;
                }
                writeln!(out)?;
            }
        }

        Ok(out)
    }

    fn generate_view_report(
        &self,
        snapshot: &Snapshot,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        let summary = snapshot.summary();

        writeln!(out, "# Budget Snapshot: {}\n", escape_markdown(&config.new_label))?;
        writeln!(out, "| Metric | Value |")?;
        writeln!(out, "|---|---|")?;
        writeln!(out, "| Leaf items | {} |", summary.item_count)?;
        writeln!(out, "| Total cost | {} |", format_money(summary.total_cost))?;
        writeln!(out, "| Total price | {} |", format_money(summary.total_price))?;
        if !summary.cost_types.is_empty() {
            writeln!(
                out,
                "| Cost types | {} |",
                escape_markdown(&summary.cost_types.join(", "))
            )?;
        }
        writeln!(out)?;

        let tree = crate::model::BudgetTree::build(&snapshot.items);
        if !tree.roots.is_empty() {
            writeln!(out, "## Hierarchy\n")?;
            for (label, node) in &tree.roots {
                Self::tree_lines(&mut out, node, label, 0)?;
            }
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
