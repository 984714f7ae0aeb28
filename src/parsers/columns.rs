//! Declarative column mapping for budget exports.
//!
//! Each recognized header is a table entry pairing the exact exported column
//! name with a setter on [`LineItem`]. Adding a column is a data change here,
//! not new control flow. Headers prefixed `"Custom: "` route to the item's
//! custom-field map; anything else is ignored.

use crate::model::LineItem;

/// Header prefix marking user-defined columns.
pub const CUSTOM_PREFIX: &str = "Custom: ";

type ColumnSetter = fn(&mut LineItem, &str);

/// Recognized columns, matched by exact header string.
const COLUMNS: &[(&str, ColumnSetter)] = &[
    ("Cost Group", |item, raw| item.cost_group = raw.to_string()),
    ("Name", |item, raw| item.name = raw.to_string()),
    ("Description", |item, raw| item.description = raw.to_string()),
    ("Quantity", |item, raw| item.quantity = parse_number(raw)),
    ("Quantity Formula", |item, raw| {
        item.quantity_formula = raw.to_string();
    }),
    ("Unit", |item, raw| item.unit = raw.to_string()),
    ("Unit Cost", |item, raw| item.unit_cost = parse_number(raw)),
    ("Unit Cost Formula", |item, raw| {
        item.unit_cost_formula = raw.to_string();
    }),
    ("Unit Price", |item, raw| item.unit_price = parse_number(raw)),
    ("Unit Price Formula", |item, raw| {
        item.unit_price_formula = raw.to_string();
    }),
    ("Extended Cost", |item, raw| {
        item.extended_cost = parse_currency(raw);
    }),
    ("Extended Price", |item, raw| {
        item.extended_price = parse_currency(raw);
    }),
    ("Cost Type", |item, raw| item.cost_type = raw.to_string()),
    ("Cost Code", |item, raw| item.cost_code = raw.to_string()),
    ("Taxable", |item, raw| item.taxable = parse_bool(raw)),
    ("Selected", |item, raw| item.selected = parse_bool(raw)),
    ("Min Selections", |item, raw| {
        item.min_selections = parse_number(raw);
    }),
    ("Max Selections", |item, raw| {
        item.max_selections = parse_number(raw);
    }),
];

/// Apply one header/value pair to an item under construction.
pub fn apply_column(item: &mut LineItem, header: &str, raw: &str) {
    if let Some(name) = header.strip_prefix(CUSTOM_PREFIX) {
        item.custom_fields.insert(name.to_string(), raw.to_string());
        return;
    }
    if let Some((_, setter)) = COLUMNS.iter().find(|(name, _)| *name == header) {
        setter(item, raw);
    }
}

/// Best-effort numeric parse: blank or unparseable input is absent, never
/// an error. Non-finite results (NaN, infinities) also count as failures.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Numeric parse for currency cells: `$` and `,` are stripped first.
#[must_use]
pub fn parse_currency(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    parse_number(&cleaned)
}

/// True iff the trimmed value case-insensitively equals `"true"`.
#[must_use]
pub fn parse_bool(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12.5"), Some(12.5));
        assert_eq!(parse_number("  3 "), Some(3.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("$1,234.50"), Some(1234.5));
        assert_eq!(parse_currency("1234.50"), Some(1234.5));
        assert_eq!(parse_currency("-$500"), Some(-500.0));
        assert_eq!(parse_currency(""), None);
        assert_eq!(parse_currency("abc"), None);
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(parse_bool(" True "));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("yes"));
        assert!(!parse_bool(""));
    }

    #[test]
    fn test_apply_column_known_headers() {
        let mut item = LineItem::default();
        apply_column(&mut item, "Name", "Labor");
        apply_column(&mut item, "Unit Cost", "25.50");
        apply_column(&mut item, "Extended Cost", "$1,020.00");
        apply_column(&mut item, "Taxable", "true");

        assert_eq!(item.name, "Labor");
        assert_eq!(item.unit_cost, Some(25.5));
        assert_eq!(item.extended_cost, Some(1020.0));
        assert!(item.taxable);
    }

    #[test]
    fn test_apply_column_custom_prefix() {
        let mut item = LineItem::default();
        apply_column(&mut item, "Custom: Phase", "Rough-in");
        assert_eq!(
            item.custom_fields.get("Phase").map(String::as_str),
            Some("Rough-in")
        );
    }

    #[test]
    fn test_apply_column_unknown_header_ignored() {
        let mut item = LineItem::default();
        apply_column(&mut item, "Internal Id", "xyz-123");
        assert_eq!(item, LineItem::default());
    }
}
