//! View command handler.
//!
//! Implements the `view` subcommand for inspecting one snapshot.

use crate::config::ViewConfig;
use crate::pipeline::{
    exit_codes, parse_snapshot_with_context, should_use_color, write_output, OutputTarget,
};
use crate::reports::{reporter_for, ReportConfig};
use anyhow::Result;

/// Run the view command, returning the desired exit code.
pub fn run_view(config: &ViewConfig) -> Result<i32> {
    let snapshot = parse_snapshot_with_context(&config.path, config.behavior.quiet)?;

    let target = OutputTarget::from_option(config.output.file.clone());
    let colored = should_use_color(&target, config.output.no_color);
    let reporter = reporter_for(config.output.format, colored);

    let report_config = ReportConfig {
        old_label: config.display_label(),
        new_label: config.display_label(),
    };
    let report = reporter.generate_view_report(&snapshot, &report_config)?;
    write_output(&target, &report)?;

    Ok(exit_codes::SUCCESS)
}
