#![no_main]
use budget_diff::parsers::parse_snapshot_str;
use libfuzzer_sys::fuzz_target;

const MAX_WRAPPED_INPUT_LEN: usize = 10_000;

/// Fuzz the snapshot parser.
///
/// Prefixes input with the real export header to increase the likelihood
/// of reaching the column mapping and numeric parsing paths rather than
/// stopping at the row-count check.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Try raw input first
        let _ = parse_snapshot_str(s);

        // Also try with a recognized header row prepended
        if s.len() < MAX_WRAPPED_INPUT_LEN {
            let wrapped = format!(
                "Cost Group,Name,Quantity,Unit Cost,Extended Cost,Taxable\n{s}"
            );
            let _ = parse_snapshot_str(&wrapped);
        }
    }
});
