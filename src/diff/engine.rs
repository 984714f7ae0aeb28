//! Snapshot diff engine.

use super::changes::compare_items;
use super::result::{DiffResult, ModifiedItem};
use crate::model::{ItemKey, LineItem, Snapshot};
use indexmap::IndexMap;

/// Key-based diff engine for budget snapshots.
///
/// Matching is exact on [`ItemKey`] — there is no positional or fuzzy
/// matching, so reordering rows between exports never produces spurious
/// changes. The engine is a pure function of its inputs and cannot fail.
#[derive(Debug, Default)]
pub struct DiffEngine;

impl DiffEngine {
    /// Create a new diff engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compare two snapshots, older first.
    pub fn diff(&self, old: &Snapshot, new: &Snapshot) -> DiffResult {
        let mut result = DiffResult::default();

        // Totals cover all leaf items, independent of matching
        for item in old.leaf_items() {
            result.summary.old_total_cost += item.extended_cost.unwrap_or(0.0);
            result.summary.old_total_price += item.extended_price.unwrap_or(0.0);
        }
        for item in new.leaf_items() {
            result.summary.new_total_cost += item.extended_cost.unwrap_or(0.0);
            result.summary.new_total_price += item.extended_price.unwrap_or(0.0);
        }

        // Identical source text cannot differ; skip matching entirely
        if old.content_hash == new.content_hash && old.content_hash != 0 {
            result.calculate_summary();
            return result;
        }

        let old_map = key_map(old);
        let new_map = key_map(new);

        for (key, new_item) in &new_map {
            match old_map.get(key) {
                None => result.added.push((*new_item).clone()),
                Some(old_item) => {
                    let changes = compare_items(old_item, new_item);
                    if !changes.is_empty() {
                        result.modified.push(ModifiedItem {
                            item: (*new_item).clone(),
                            old_item: (*old_item).clone(),
                            changes,
                        });
                    }
                }
            }
        }

        for (key, old_item) in &old_map {
            if !new_map.contains_key(key) {
                result.removed.push((*old_item).clone());
            }
        }

        result.calculate_summary();

        tracing::debug!(
            added = result.summary.added_count,
            removed = result.summary.removed_count,
            modified = result.summary.modified_count,
            "diff complete"
        );

        result
    }
}

/// Build the key lookup for one snapshot's leaf items.
///
/// Group rows are excluded before matching. A duplicate key within one
/// snapshot is last-row-wins: the later row's value replaces the earlier
/// one while keeping the earlier row's position in iteration order.
fn key_map(snapshot: &Snapshot) -> IndexMap<ItemKey, &LineItem> {
    let mut map = IndexMap::new();
    for item in snapshot.leaf_items() {
        map.insert(item.key(), item);
    }
    map
}
