//! Hierarchy tree view over a flat item list.
//!
//! Snapshots arrive as a flat row sequence; for display the items are nested
//! back under their cost-group path. Node order follows first appearance in
//! the source, so the tree renders in export order.

use super::LineItem;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node in the budget hierarchy: one cost-group path segment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeNode {
    /// Child groups keyed by segment label, in first-seen order
    pub children: IndexMap<String, TreeNode>,
    /// Leaf items that live directly at this node
    pub items: Vec<LineItem>,
}

impl TreeNode {
    /// Total number of leaf items at this node and below.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len() + self.children.values().map(TreeNode::item_count).sum::<usize>()
    }

    /// Sum of present extended costs at this node and below.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.extended_cost.unwrap_or(0.0))
            .sum::<f64>()
            + self.children.values().map(TreeNode::total_cost).sum::<f64>()
    }
}

/// The full hierarchy tree for one snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetTree {
    /// Top-level cost groups, in first-seen order
    pub roots: IndexMap<String, TreeNode>,
    /// Items with no cost group at all
    pub unassigned: Vec<LineItem>,
}

impl BudgetTree {
    /// Nest a flat item sequence under its hierarchy paths.
    ///
    /// Group rows materialize their node but contribute no items; leaf items
    /// land in the item list of their deepest hierarchy node. Items with an
    /// empty hierarchy go to `unassigned`.
    #[must_use]
    pub fn build(items: &[LineItem]) -> Self {
        let mut tree = Self::default();

        for item in items {
            let Some((first, rest)) = item.hierarchy.split_first() else {
                if !item.is_group() {
                    tree.unassigned.push(item.clone());
                }
                continue;
            };

            let mut node = tree.roots.entry(first.clone()).or_default();
            for segment in rest {
                node = node.children.entry(segment.clone()).or_default();
            }

            if !item.is_group() {
                node.items.push(item.clone());
            }
        }

        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(cost_group: &str, name: &str, cost: Option<f64>) -> LineItem {
        LineItem {
            cost_group: cost_group.to_string(),
            hierarchy: LineItem::split_hierarchy(cost_group),
            name: name.to_string(),
            extended_cost: cost,
            ..LineItem::default()
        }
    }

    #[test]
    fn test_build_nests_by_hierarchy() {
        let items = vec![
            item("Scope; Demo", "", None), // group row
            item("Scope; Demo", "Labor", Some(500.0)),
            item("Scope; Demo", "Disposal", Some(200.0)),
            item("Scope; Framing", "Lumber", Some(1200.0)),
        ];
        let tree = BudgetTree::build(&items);

        assert_eq!(tree.roots.len(), 1);
        let scope = &tree.roots["Scope"];
        assert_eq!(scope.children.len(), 2);
        assert_eq!(scope.children["Demo"].items.len(), 2);
        assert_eq!(scope.children["Framing"].items.len(), 1);
        assert_eq!(scope.item_count(), 3);
        assert!((scope.total_cost() - 1900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_items_without_hierarchy_are_unassigned() {
        let items = vec![item("", "Stray", Some(10.0))];
        let tree = BudgetTree::build(&items);
        assert!(tree.roots.is_empty());
        assert_eq!(tree.unassigned.len(), 1);
    }
}
