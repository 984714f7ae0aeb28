//! Budget line-item data structures.

use super::ItemKey;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of a budget snapshot export.
///
/// A row is either a leaf cost item or a group/container row: a hierarchy
/// node with no name that only carries structure. Items are built by the
/// parser and never mutated afterwards — the diff engine takes them as
/// immutable input.
///
/// Numeric fields are `Option<f64>` throughout: a blank or unparseable
/// source cell is *absent*, not zero, and never an error. Absent values
/// contribute zero to aggregate sums and compare as "no value".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Raw cost-group string as exported, e.g. `"SCOPE; DEMO; LABOR"`
    pub cost_group: String,
    /// `cost_group` split on `;`, trimmed, empty segments dropped (root first)
    pub hierarchy: Vec<String>,
    /// Item name — empty for group/container rows
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Quantity, absent when blank or unparseable
    pub quantity: Option<f64>,
    /// Formula behind the quantity cell, verbatim
    pub quantity_formula: String,
    /// Unit of measure (e.g. "EA", "SF")
    pub unit: String,
    /// Per-unit cost
    pub unit_cost: Option<f64>,
    /// Formula behind the unit cost cell, verbatim
    pub unit_cost_formula: String,
    /// Per-unit price
    pub unit_price: Option<f64>,
    /// Formula behind the unit price cell, verbatim
    pub unit_price_formula: String,
    /// Extended (quantity-multiplied) cost, as exported — not recomputed
    pub extended_cost: Option<f64>,
    /// Extended (quantity-multiplied) price, as exported — not recomputed
    pub extended_price: Option<f64>,
    /// Cost type classification (e.g. "Labor", "Material")
    pub cost_type: String,
    /// Cost code
    pub cost_code: String,
    /// Whether the item is taxable
    pub taxable: bool,
    /// Whether the item is selected (selection-group member)
    pub selected: bool,
    /// Minimum selections for a selection group
    pub min_selections: Option<f64>,
    /// Maximum selections for a selection group
    pub max_selections: Option<f64>,
    /// Values of `Custom: <name>` columns, keyed by name with the prefix
    /// stripped, in column order
    pub custom_fields: IndexMap<String, String>,
}

impl LineItem {
    /// Whether this row is a group/container node rather than a cost item.
    ///
    /// True iff the name is empty and the hierarchy is non-empty.
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.name.is_empty() && !self.hierarchy.is_empty()
    }

    /// Derived cross-snapshot identity for this item.
    #[must_use]
    pub fn key(&self) -> ItemKey {
        ItemKey::derive(&self.hierarchy, &self.name, &self.cost_code)
    }

    /// Display name with the hierarchy path prefixed, e.g. `"Demo > Labor"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.hierarchy.is_empty() {
            self.name.clone()
        } else if self.name.is_empty() {
            self.hierarchy.join(" > ")
        } else {
            format!("{} > {}", self.hierarchy.join(" > "), self.name)
        }
    }

    /// Split a raw cost-group string into hierarchy segments.
    ///
    /// Segments are trimmed and empty ones dropped, so irregular spacing or
    /// doubled separators in the export don't produce phantom levels.
    #[must_use]
    pub fn split_hierarchy(cost_group: &str) -> Vec<String> {
        cost_group
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_hierarchy_trims_segments() {
        assert_eq!(
            LineItem::split_hierarchy("A; B ;C"),
            vec!["A".to_string(), "B".to_string(), "C".to_string()]
        );
    }

    #[test]
    fn test_split_hierarchy_drops_empty_segments() {
        assert_eq!(
            LineItem::split_hierarchy("A;;B; "),
            vec!["A".to_string(), "B".to_string()]
        );
        assert!(LineItem::split_hierarchy("").is_empty());
        assert!(LineItem::split_hierarchy(" ; ;").is_empty());
    }

    #[test]
    fn test_is_group() {
        let group = LineItem {
            hierarchy: vec!["Demo".to_string()],
            ..LineItem::default()
        };
        assert!(group.is_group());

        let leaf = LineItem {
            hierarchy: vec!["Demo".to_string()],
            name: "Labor".to_string(),
            ..LineItem::default()
        };
        assert!(!leaf.is_group());

        // A row with neither name nor hierarchy is not a group
        assert!(!LineItem::default().is_group());
    }

    #[test]
    fn test_display_name() {
        let item = LineItem {
            hierarchy: vec!["Scope".to_string(), "Demo".to_string()],
            name: "Labor".to_string(),
            ..LineItem::default()
        };
        assert_eq!(item.display_name(), "Scope > Demo > Labor");

        let group = LineItem {
            hierarchy: vec!["Scope".to_string()],
            ..LineItem::default()
        };
        assert_eq!(group.display_name(), "Scope");
    }
}
