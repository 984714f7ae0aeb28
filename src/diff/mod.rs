//! Key-based snapshot diffing.
//!
//! Home of the [`DiffEngine`], which matches leaf items across two parsed
//! snapshots by derived [`ItemKey`](crate::model::ItemKey) and computes
//! added/removed/modified sets plus aggregate financial impact.

mod changes;
mod engine;
mod result;

pub use changes::{compare_items, fields, NUMERIC_TOLERANCE};
pub use engine::DiffEngine;
pub use result::{DiffResult, DiffSummary, FieldChange, FieldKind, FieldValue, ModifiedItem};
