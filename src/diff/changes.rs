//! Field-level comparison of matched item pairs.
//!
//! Which fields are compared, and how, is a declarative table per family:
//! numeric fields with an absolute tolerance, text fields trimmed and
//! case-sensitive, boolean flags, and the union of custom columns. Adding a
//! tracked field is a table entry, not new control flow.
//!
//! The cost-group hierarchy is deliberately not a compared field: an item
//! whose only difference is its hierarchy path produces no modification
//! record, because the hierarchy participates in the match key itself.

use super::result::{FieldChange, FieldKind, FieldValue};
use crate::model::LineItem;

/// Differences below this absolute threshold are rounding noise, not
/// modifications.
pub const NUMERIC_TOLERANCE: f64 = 0.001;

/// Machine keys referenced by the summary calculation.
pub mod fields {
    pub const EXTENDED_COST: &str = "extendedCost";
    pub const EXTENDED_PRICE: &str = "extendedPrice";
}

struct NumericField {
    field: &'static str,
    label: &'static str,
    currency: bool,
    get: fn(&LineItem) -> Option<f64>,
}

const NUMERIC_FIELDS: &[NumericField] = &[
    NumericField {
        field: "quantity",
        label: "Quantity",
        currency: false,
        get: |i| i.quantity,
    },
    NumericField {
        field: "unitCost",
        label: "Unit Cost",
        currency: true,
        get: |i| i.unit_cost,
    },
    NumericField {
        field: fields::EXTENDED_COST,
        label: "Extended Cost",
        currency: true,
        get: |i| i.extended_cost,
    },
    NumericField {
        field: "unitPrice",
        label: "Unit Price",
        currency: true,
        get: |i| i.unit_price,
    },
    NumericField {
        field: fields::EXTENDED_PRICE,
        label: "Extended Price",
        currency: true,
        get: |i| i.extended_price,
    },
];

struct TextField {
    field: &'static str,
    label: &'static str,
    get: fn(&LineItem) -> &str,
}

const TEXT_FIELDS: &[TextField] = &[
    TextField {
        field: "description",
        label: "Description",
        get: |i| &i.description,
    },
    TextField {
        field: "unit",
        label: "Unit",
        get: |i| &i.unit,
    },
    TextField {
        field: "costType",
        label: "Cost Type",
        get: |i| &i.cost_type,
    },
    TextField {
        field: "quantityFormula",
        label: "Quantity Formula",
        get: |i| &i.quantity_formula,
    },
    TextField {
        field: "unitCostFormula",
        label: "Unit Cost Formula",
        get: |i| &i.unit_cost_formula,
    },
    TextField {
        field: "unitPriceFormula",
        label: "Unit Price Formula",
        get: |i| &i.unit_price_formula,
    },
];

struct BoolField {
    field: &'static str,
    label: &'static str,
    get: fn(&LineItem) -> bool,
}

const BOOL_FIELDS: &[BoolField] = &[
    BoolField {
        field: "taxable",
        label: "Taxable",
        get: |i| i.taxable,
    },
    BoolField {
        field: "selected",
        label: "Selected",
        get: |i| i.selected,
    },
];

/// Compare one matched old/new pair field by field.
///
/// Returns the detected changes in table order: numerics, text, booleans,
/// then custom columns. An empty result means the pair is unchanged.
#[must_use]
pub fn compare_items(old: &LineItem, new: &LineItem) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    for f in NUMERIC_FIELDS {
        let old_value = (f.get)(old);
        let new_value = (f.get)(new);

        let unchanged = match (old_value, new_value) {
            (None, None) => true,
            (Some(a), Some(b)) => (a - b).abs() < NUMERIC_TOLERANCE,
            _ => false,
        };
        if unchanged {
            continue;
        }

        changes.push(FieldChange {
            field: f.field.to_string(),
            label: f.label.to_string(),
            old_value: FieldValue::from_number(old_value),
            new_value: FieldValue::from_number(new_value),
            kind: FieldKind::Numeric,
            is_currency: f.currency,
            delta: Some(new_value.unwrap_or(0.0) - old_value.unwrap_or(0.0)),
        });
    }

    for f in TEXT_FIELDS {
        let old_value = (f.get)(old).trim();
        let new_value = (f.get)(new).trim();
        if old_value == new_value {
            continue;
        }

        changes.push(FieldChange {
            field: f.field.to_string(),
            label: f.label.to_string(),
            old_value: FieldValue::Text(old_value.to_string()),
            new_value: FieldValue::Text(new_value.to_string()),
            kind: FieldKind::Text,
            is_currency: false,
            delta: None,
        });
    }

    for f in BOOL_FIELDS {
        let old_value = (f.get)(old);
        let new_value = (f.get)(new);
        if old_value == new_value {
            continue;
        }

        changes.push(FieldChange {
            field: f.field.to_string(),
            label: f.label.to_string(),
            old_value: FieldValue::Bool(old_value),
            new_value: FieldValue::Bool(new_value),
            kind: FieldKind::Boolean,
            is_currency: false,
            delta: None,
        });
    }

    // Custom columns: union of both sides' keys, newer side's order first
    let mut names: Vec<&String> = new.custom_fields.keys().collect();
    for name in old.custom_fields.keys() {
        if !new.custom_fields.contains_key(name) {
            names.push(name);
        }
    }

    for name in names {
        let old_value = old
            .custom_fields
            .get(name)
            .map_or("", |v| v.trim());
        let new_value = new
            .custom_fields
            .get(name)
            .map_or("", |v| v.trim());
        if old_value == new_value {
            continue;
        }

        changes.push(FieldChange {
            field: format!("custom.{name}"),
            label: name.clone(),
            old_value: FieldValue::Text(old_value.to_string()),
            new_value: FieldValue::Text(new_value.to_string()),
            kind: FieldKind::Custom,
            is_currency: false,
            delta: None,
        });
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> LineItem {
        LineItem {
            hierarchy: vec!["Demo".to_string()],
            name: "Labor".to_string(),
            cost_code: "L1".to_string(),
            quantity: Some(8.0),
            unit: "HR".to_string(),
            unit_cost: Some(25.0),
            extended_cost: Some(200.0),
            extended_price: Some(320.0),
            taxable: true,
            ..LineItem::default()
        }
    }

    #[test]
    fn test_identical_items_have_no_changes() {
        assert!(compare_items(&item(), &item()).is_empty());
    }

    #[test]
    fn test_numeric_change_with_delta() {
        let mut new = item();
        new.extended_cost = Some(300.0);

        let changes = compare_items(&item(), &new);
        assert_eq!(changes.len(), 1);
        let change = &changes[0];
        assert_eq!(change.field, "extendedCost");
        assert_eq!(change.label, "Extended Cost");
        assert_eq!(change.kind, FieldKind::Numeric);
        assert!(change.is_currency);
        assert_eq!(change.delta, Some(100.0));
    }

    #[test]
    fn test_tolerance_suppresses_rounding_noise() {
        let mut new = item();
        new.extended_cost = Some(200.0009);
        assert!(compare_items(&item(), &new).is_empty());

        new.extended_cost = Some(200.01);
        let changes = compare_items(&item(), &new);
        assert_eq!(changes.len(), 1);
        let delta = changes[0].delta.unwrap();
        assert!((delta - 0.01).abs() < 1e-9);
    }

    #[test]
    fn test_one_sided_absence_is_a_change() {
        let mut new = item();
        new.quantity = None;

        let changes = compare_items(&item(), &new);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].field, "quantity");
        assert_eq!(changes[0].old_value, FieldValue::Number(8.0));
        assert_eq!(changes[0].new_value, FieldValue::Absent);
        assert_eq!(changes[0].delta, Some(-8.0));
    }

    #[test]
    fn test_both_absent_is_no_change() {
        let mut old = item();
        let mut new = item();
        old.quantity = None;
        new.quantity = None;
        assert!(compare_items(&old, &new).is_empty());
    }

    #[test]
    fn test_text_compared_trimmed_case_sensitive() {
        let mut new = item();
        new.unit = " HR ".to_string();
        assert!(compare_items(&item(), &new).is_empty());

        new.unit = "hr".to_string();
        let changes = compare_items(&item(), &new);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, FieldKind::Text);
    }

    #[test]
    fn test_boolean_change() {
        let mut new = item();
        new.taxable = false;

        let changes = compare_items(&item(), &new);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].field, "taxable");
        assert_eq!(changes[0].old_value, FieldValue::Bool(true));
        assert_eq!(changes[0].new_value, FieldValue::Bool(false));
        assert_eq!(changes[0].delta, None);
    }

    #[test]
    fn test_custom_field_union() {
        let mut old = item();
        let mut new = item();
        old.custom_fields.insert("Phase".to_string(), "Rough".to_string());
        new.custom_fields.insert("Phase".to_string(), "Finish".to_string());
        new.custom_fields.insert("Vendor".to_string(), "Acme".to_string());

        let changes = compare_items(&old, &new);
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].field, "custom.Phase");
        assert_eq!(changes[0].kind, FieldKind::Custom);
        assert_eq!(changes[1].field, "custom.Vendor");
        assert_eq!(changes[1].old_value, FieldValue::Text(String::new()));
    }

    #[test]
    fn test_hierarchy_is_not_a_compared_field() {
        let mut new = item();
        new.cost_group = "Other; Place".to_string();
        new.hierarchy = vec!["Other".to_string(), "Place".to_string()];
        // Same tracked fields, different hierarchy: no change record
        assert!(compare_items(&item(), &new).is_empty());
    }
}
