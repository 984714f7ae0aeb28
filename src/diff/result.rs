//! Diff result structures.

use crate::model::LineItem;
use serde::{Deserialize, Serialize};

/// A compared field value: text, number, boolean, or absent.
///
/// Absent covers numeric cells that were blank or unparseable in the source;
/// it serializes as `null` so downstream renderers can distinguish "no
/// value" from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No value present on this side
    Absent,
    /// Numeric value
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// Text value
    Text(String),
}

impl FieldValue {
    /// Wrap an optional numeric as a field value.
    #[must_use]
    pub fn from_number(value: Option<f64>) -> Self {
        value.map_or(Self::Absent, Self::Number)
    }

    /// Render for plain-text reports.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Absent => "-".to_string(),
            Self::Number(n) => format!("{n}"),
            Self::Bool(b) => b.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Which comparison family produced a [`FieldChange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Tolerance-compared numeric field
    Numeric,
    /// Trimmed, case-sensitive text field
    Text,
    /// Boolean flag
    Boolean,
    /// User-defined `Custom: <name>` column
    Custom,
}

/// One detected difference on a matched item pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldChange {
    /// Machine key, e.g. `"extendedCost"` or `"custom.Phase"`
    pub field: String,
    /// Display label, e.g. `"Extended Cost"`
    pub label: String,
    /// Value on the older side
    pub old_value: FieldValue,
    /// Value on the newer side
    pub new_value: FieldValue,
    /// Comparison family
    pub kind: FieldKind,
    /// Whether the field carries a currency amount
    pub is_currency: bool,
    /// `new - old` with absent sides as zero; numeric fields only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
}

/// A matched item pair that differs in at least one tracked field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifiedItem {
    /// The newer version of the item
    pub item: LineItem,
    /// The older version of the item
    pub old_item: LineItem,
    /// Detected differences, in comparison-table order
    pub changes: Vec<FieldChange>,
}

impl ModifiedItem {
    /// The delta recorded for one numeric field, zero if that field did not
    /// change. Summary deltas are taken from here so they always agree with
    /// the per-item change records.
    #[must_use]
    pub fn delta_for(&self, field: &str) -> f64 {
        self.changes
            .iter()
            .find(|c| c.field == field)
            .and_then(|c| c.delta)
            .unwrap_or(0.0)
    }
}

/// Aggregate financial and count statistics for a diff.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Sum of present extended costs over the older snapshot's leaf items
    pub old_total_cost: f64,
    /// Sum of present extended prices over the older snapshot's leaf items
    pub old_total_price: f64,
    /// Sum of present extended costs over the newer snapshot's leaf items
    pub new_total_cost: f64,
    /// Sum of present extended prices over the newer snapshot's leaf items
    pub new_total_price: f64,
    /// `new_total_cost - old_total_cost`
    pub cost_change: f64,
    /// `new_total_price - old_total_price`
    pub price_change: f64,
    /// Number of added items
    pub added_count: usize,
    /// Number of removed items
    pub removed_count: usize,
    /// Number of modified items
    pub modified_count: usize,
    /// Extended cost carried by added items
    pub added_cost: f64,
    /// Extended price carried by added items
    pub added_price: f64,
    /// Extended cost carried by removed items
    pub removed_cost: f64,
    /// Extended price carried by removed items
    pub removed_price: f64,
    /// Net extended-cost delta across modified items
    pub modified_cost_delta: f64,
    /// Net extended-price delta across modified items
    pub modified_price_delta: f64,
}

/// Complete result of comparing two snapshots.
///
/// Group rows never appear in any of the three lists; only leaf cost items
/// participate in matching, and totals are computed over leaf items as well.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[must_use]
pub struct DiffResult {
    /// Items present in the newer snapshot only, in newer-snapshot order
    pub added: Vec<LineItem>,
    /// Items present in the older snapshot only, in older-snapshot order
    pub removed: Vec<LineItem>,
    /// Matched items with at least one tracked-field difference
    pub modified: Vec<ModifiedItem>,
    /// Aggregate statistics
    pub summary: DiffSummary,
}

impl DiffResult {
    /// Whether any of the three change lists is non-empty.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty() || !self.modified.is_empty()
    }

    /// Fill the list-derived summary fields from the current change lists.
    ///
    /// The snapshot-wide totals are set by the engine before matching; this
    /// completes the counts, the added/removed sums, and the modified deltas
    /// (taken from the per-item [`FieldChange`] deltas, never recomputed).
    pub fn calculate_summary(&mut self) {
        self.summary.cost_change = self.summary.new_total_cost - self.summary.old_total_cost;
        self.summary.price_change = self.summary.new_total_price - self.summary.old_total_price;

        self.summary.added_count = self.added.len();
        self.summary.removed_count = self.removed.len();
        self.summary.modified_count = self.modified.len();

        self.summary.added_cost = sum_costs(&self.added);
        self.summary.added_price = sum_prices(&self.added);
        self.summary.removed_cost = sum_costs(&self.removed);
        self.summary.removed_price = sum_prices(&self.removed);

        self.summary.modified_cost_delta = self
            .modified
            .iter()
            .map(|m| m.delta_for(super::fields::EXTENDED_COST))
            .sum();
        self.summary.modified_price_delta = self
            .modified
            .iter()
            .map(|m| m.delta_for(super::fields::EXTENDED_PRICE))
            .sum();
    }
}

fn sum_costs(items: &[LineItem]) -> f64 {
    items.iter().map(|i| i.extended_cost.unwrap_or(0.0)).sum()
}

fn sum_prices(items: &[LineItem]) -> f64 {
    items.iter().map(|i| i.extended_price.unwrap_or(0.0)).sum()
}
