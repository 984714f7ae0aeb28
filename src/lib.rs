//! **Semantic diffing for project budget snapshots.**
//!
//! `budget-diff` parses budget backup exports (CSV) into a normalized
//! line-item model, matches items across two snapshots by a derived
//! composite key, and computes a structured delta: additions, removals,
//! field-level modifications, and aggregate financial impact. It powers
//! both a command-line interface and a Rust library for programmatic use.
//!
//! ## Key Features
//!
//! - **Robust CSV ingestion**: a character-level tokenizer that honors
//!   quoted fields with embedded commas and newlines, doubled-quote
//!   escapes, BOM prefixes, and both CRLF and LF row endings.
//! - **Best-effort parsing**: malformed input degrades to an empty
//!   snapshot and unparseable numeric cells to absent values — a backup
//!   comparison never fails on messy exports.
//! - **Key-based matching**: items are correlated across snapshots by
//!   their cost-group hierarchy, name, and cost code, so row reordering
//!   between exports never produces spurious changes.
//! - **Consistent aggregates**: summary deltas are taken from the same
//!   per-field change records shown per item, so the numbers always agree.
//! - **Flexible reporting**: JSON for integration, Markdown for
//!   documentation, and a compact colored summary for the terminal.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the central data structures — [`LineItem`], the derived
//!   [`ItemKey`] identity, the [`Snapshot`] container, and the
//!   [`BudgetTree`](model::BudgetTree) display nesting.
//! - **[`parsers`]**: turns raw CSV text into a [`Snapshot`].
//! - **[`diff`]**: home of the [`DiffEngine`], which compares two parsed
//!   snapshots and produces a [`DiffResult`].
//! - **[`reports`]**: output generators for the supported report formats.
//! - **[`pipeline`]**: orchestration shared by the CLI command handlers.
//!
//! ## Getting Started: Diffing Two Snapshots
//!
//! ```no_run
//! use std::path::Path;
//! use budget_diff::{parse_snapshot, DiffEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let old = parse_snapshot(Path::new("backup-2024-05-01.csv"))?;
//!     let new = parse_snapshot(Path::new("backup-2024-06-01.csv"))?;
//!
//!     let diff = DiffEngine::new().diff(&old, &new);
//!
//!     println!("Added: {}", diff.added.len());
//!     println!("Removed: {}", diff.removed.len());
//!     println!("Cost change: {:+.2}", diff.summary.cost_change);
//!
//!     Ok(())
//! }
//! ```
//!
//! Parsing from an in-memory string never fails:
//!
//! ```
//! use budget_diff::parse_snapshot_str;
//!
//! let snapshot = parse_snapshot_str("Cost Group,Name,Extended Cost\nDemo,Labor,$500.00\n");
//! assert_eq!(snapshot.item_count(), 1);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // f64 sums over item counts are bounded in practice
    clippy::cast_precision_loss,
    // Variable names like `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{BehaviorConfig, DiffConfig, DiffPaths, OutputConfig, ReportLabels, ViewConfig};
pub use diff::{DiffEngine, DiffResult, DiffSummary, FieldChange, FieldKind, FieldValue};
pub use model::{BudgetTree, ItemKey, LineItem, Snapshot, SnapshotSummary};
pub use parsers::{parse_snapshot, parse_snapshot_str, ParseError};
pub use reports::{ReportConfig, ReportFormat, ReportGenerator};
