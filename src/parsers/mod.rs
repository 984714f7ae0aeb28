//! Budget snapshot parsing.
//!
//! Turns a raw CSV export into the normalized [`Snapshot`] model. Parsing is
//! best-effort by design: empty or malformed input yields an empty snapshot,
//! unparseable numeric cells become absent values, and unrecognized columns
//! are skipped. The only fallible operation is reading a file from disk.
//!
//! ## Usage
//!
//! ```no_run
//! use budget_diff::parsers::parse_snapshot;
//! use std::path::Path;
//!
//! let snapshot = parse_snapshot(Path::new("backup-2024-06-01.csv")).unwrap();
//! println!("{} items", snapshot.item_count());
//! ```

mod columns;
mod csv;

pub use columns::{apply_column, parse_bool, parse_currency, parse_number, CUSTOM_PREFIX};
pub use csv::{is_blank_row, tokenize};

use crate::model::{ItemKey, LineItem, Snapshot};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use xxhash_rust::xxh3::xxh3_64;

/// Errors that can occur while loading a snapshot.
///
/// String-level parsing itself cannot fail; only the surrounding IO can.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error reading {path:?}: {message}")]
    Io { path: PathBuf, message: String },
}

/// Read and parse a snapshot file.
pub fn parse_snapshot(path: &Path) -> Result<Snapshot, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(parse_snapshot_str(&content))
}

/// Parse a snapshot from raw CSV text.
///
/// Pure function of the input: no IO, no shared state, safe to call
/// concurrently. Fewer than two physical rows (header plus at least one
/// data row) yields an empty snapshot.
#[must_use]
pub fn parse_snapshot_str(text: &str) -> Snapshot {
    // Hash after BOM stripping so a BOM-only difference still reads as
    // identical content
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let content_hash = xxh3_64(text.as_bytes());
    let rows = tokenize(text);
    if rows.len() < 2 {
        return Snapshot::new(Vec::new(), content_hash);
    }

    let mut rows = rows.into_iter();
    let Some(headers) = rows.next() else {
        return Snapshot::new(Vec::new(), content_hash);
    };

    let mut items = Vec::new();
    let mut seen_keys: HashSet<ItemKey> = HashSet::new();
    let mut collisions = 0usize;

    for row in rows {
        if is_blank_row(&row) {
            continue;
        }

        let mut item = LineItem::default();
        // Positional zip; unmatched trailing headers or values are ignored
        for (header, raw) in headers.iter().zip(row.iter()) {
            apply_column(&mut item, header, raw);
        }
        item.hierarchy = LineItem::split_hierarchy(&item.cost_group);

        if !seen_keys.insert(item.key()) {
            collisions += 1;
        }
        items.push(item);
    }

    if collisions > 0 {
        tracing::info!(
            collisions,
            "duplicate item keys in snapshot; later rows win during matching"
        );
    }

    Snapshot::new(items, content_hash)
}
