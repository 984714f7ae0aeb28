//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by
//! main.rs. Each handler implements the business logic for a specific CLI
//! subcommand and returns the process exit code.

mod diff;
mod view;

pub use diff::run_diff;
pub use view::run_view;

// Re-export config types used by handlers
pub use crate::config::{DiffConfig, ViewConfig};
