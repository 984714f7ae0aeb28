#![no_main]
use budget_diff::parsers::tokenize;
use libfuzzer_sys::fuzz_target;

/// Fuzz the CSV tokenizer directly.
///
/// The tokenizer must never panic, whatever mix of quotes, separators,
/// and line endings it is fed.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = tokenize(s);
    }
});
