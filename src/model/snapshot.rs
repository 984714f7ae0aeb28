//! Parsed budget snapshot and its aggregate summary.

use super::LineItem;
use serde::{Deserialize, Serialize};

/// A parsed budget snapshot: the ordered line items of one CSV export.
///
/// Row order is preserved from the source text. The snapshot is a pure
/// function of its input — parsing the same text twice yields equal
/// snapshots, which the diff engine exploits via [`content_hash`].
///
/// [`content_hash`]: Snapshot::content_hash
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Line items in source row order
    pub items: Vec<LineItem>,
    /// xxh3 hash of the source text, for a cheap identical-input check
    #[serde(skip)]
    pub content_hash: u64,
}

impl Snapshot {
    /// Create a snapshot from parsed items and the source-text hash.
    #[must_use]
    pub fn new(items: Vec<LineItem>, content_hash: u64) -> Self {
        Self {
            items,
            content_hash,
        }
    }

    /// Total row count, groups included.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Leaf cost items only, in source order.
    pub fn leaf_items(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter(|i| !i.is_group())
    }

    /// Aggregate totals over the snapshot's leaf items.
    #[must_use]
    pub fn summary(&self) -> SnapshotSummary {
        let mut summary = SnapshotSummary::default();
        let mut cost_types: Vec<String> = Vec::new();

        for item in self.leaf_items() {
            summary.item_count += 1;
            summary.total_cost += item.extended_cost.unwrap_or(0.0);
            summary.total_price += item.extended_price.unwrap_or(0.0);

            let cost_type = item.cost_type.trim();
            if !cost_type.is_empty() && !cost_types.iter().any(|t| t == cost_type) {
                cost_types.push(cost_type.to_string());
            }
        }

        summary.cost_types = cost_types;
        summary
    }
}

/// Aggregate financial stats for one snapshot.
///
/// Computed over leaf items only; group rows carry no amounts of their own.
/// Absent extended values contribute zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotSummary {
    /// Number of leaf cost items
    pub item_count: usize,
    /// Sum of present extended costs
    pub total_cost: f64,
    /// Sum of present extended prices
    pub total_price: f64,
    /// Distinct cost types, in first-seen order
    pub cost_types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, cost_type: &str, cost: Option<f64>, price: Option<f64>) -> LineItem {
        LineItem {
            hierarchy: vec!["Demo".to_string()],
            name: name.to_string(),
            cost_type: cost_type.to_string(),
            extended_cost: cost,
            extended_price: price,
            ..LineItem::default()
        }
    }

    #[test]
    fn test_summary_totals_and_cost_types() {
        let group = LineItem {
            hierarchy: vec!["Demo".to_string()],
            extended_cost: Some(9999.0),
            ..LineItem::default()
        };
        let snapshot = Snapshot::new(
            vec![
                group,
                leaf("Labor", "Labor", Some(500.0), Some(750.0)),
                leaf("Disposal", "Subcontractor", Some(200.0), None),
                leaf("Permit", "Labor", None, Some(50.0)),
            ],
            0,
        );

        let summary = snapshot.summary();
        assert_eq!(summary.item_count, 3);
        assert!((summary.total_cost - 700.0).abs() < f64::EPSILON);
        assert!((summary.total_price - 800.0).abs() < f64::EPSILON);
        // Group amounts are excluded; cost types deduplicated in first-seen order
        assert_eq!(summary.cost_types, vec!["Labor", "Subcontractor"]);
    }

    #[test]
    fn test_empty_snapshot_summary() {
        let summary = Snapshot::default().summary();
        assert_eq!(summary.item_count, 0);
        assert_eq!(summary.total_cost, 0.0);
        assert!(summary.cost_types.is_empty());
    }
}
