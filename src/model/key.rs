//! Cross-snapshot identity for budget line items.
//!
//! Two exports of the same budget never share row ids, so identity has to be
//! derived from the item's own coordinates: its cost-group hierarchy, its
//! name, and its cost code. The derived key is the sole identity the diff
//! engine uses — two items with the same key are the same item as far as
//! comparison is concerned.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder name segment for group/container rows, which have no name.
const GROUP_NAME: &str = "[GROUP]";

/// Derived composite identity for a [`LineItem`](super::LineItem).
///
/// The key is the lowercased join of three segments:
///
/// ```text
/// <hierarchy joined by " > ">|<name or "[GROUP]">|<cost code>
/// ```
///
/// It is deterministic given `(hierarchy, name, cost_code)` and usable as a
/// hash-map key. Keys are compared byte-for-byte; all normalization happens
/// at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(String);

impl ItemKey {
    /// Derive the key from an item's identity coordinates.
    #[must_use]
    pub fn derive(hierarchy: &[String], name: &str, cost_code: &str) -> Self {
        let path = hierarchy.join(" > ");
        let name = if name.is_empty() { GROUP_NAME } else { name };
        Self(format!("{path}|{name}|{cost_code}").to_lowercase())
    }

    /// The underlying key string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hierarchy(parts: &[&str]) -> Vec<String> {
        parts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_key_shape() {
        let key = ItemKey::derive(&hierarchy(&["Scope", "Demo"]), "Labor", "L1");
        assert_eq!(key.value(), "scope > demo|labor|l1");
    }

    #[test]
    fn test_key_is_case_insensitive() {
        let a = ItemKey::derive(&hierarchy(&["DEMO"]), "Labor", "L1");
        let b = ItemKey::derive(&hierarchy(&["demo"]), "LABOR", "l1");
        assert_eq!(a, b);
    }

    #[test]
    fn test_group_rows_use_placeholder_name() {
        let key = ItemKey::derive(&hierarchy(&["Demo"]), "", "");
        assert_eq!(key.value(), "demo|[group]|");
    }

    #[test]
    fn test_empty_cost_code_still_keyed() {
        let with = ItemKey::derive(&hierarchy(&["Demo"]), "Labor", "L1");
        let without = ItemKey::derive(&hierarchy(&["Demo"]), "Labor", "");
        assert_ne!(with, without);
    }
}
