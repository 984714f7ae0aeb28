//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two snapshots.

use crate::config::DiffConfig;
use crate::diff::DiffEngine;
use crate::pipeline::{
    exit_codes, parse_snapshot_with_context, should_use_color, write_output, OutputTarget,
};
use crate::reports::{reporter_for, ReportConfig};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_diff(config: &DiffConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    let old = parse_snapshot_with_context(&config.paths.old, quiet)?;
    let new = parse_snapshot_with_context(&config.paths.new, quiet)?;

    if !quiet {
        tracing::info!(
            "Comparing {} items against {} items",
            old.item_count(),
            new.item_count()
        );
    }

    let result = DiffEngine::new().diff(&old, &new);
    let exit_code = determine_exit_code(config, result.has_changes());

    let target = OutputTarget::from_option(config.output.file.clone());
    let colored = should_use_color(&target, config.output.no_color);
    let reporter = reporter_for(config.output.format, colored);

    let report_config = ReportConfig {
        old_label: config.old_label(),
        new_label: config.new_label(),
    };
    let report = reporter.generate_diff_report(&result, &old, &new, &report_config)?;
    write_output(&target, &report)?;

    Ok(exit_code)
}

/// Determine the appropriate exit code from the diff outcome and flags.
const fn determine_exit_code(config: &DiffConfig, has_changes: bool) -> i32 {
    if config.behavior.fail_on_change && has_changes {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BehaviorConfig, DiffPaths, OutputConfig, ReportLabels};
    use crate::reports::ReportFormat;
    use std::io::Write as _;
    use std::path::Path;

    fn write_csv(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{body}").unwrap();
        path
    }

    fn config(old: std::path::PathBuf, new: std::path::PathBuf, fail_on_change: bool) -> DiffConfig {
        DiffConfig {
            paths: DiffPaths { old, new },
            output: OutputConfig {
                format: ReportFormat::Json,
                file: None,
                no_color: true,
            },
            behavior: BehaviorConfig {
                quiet: true,
                fail_on_change,
            },
            labels: ReportLabels::default(),
        }
    }

    #[test]
    fn test_run_diff_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let old = write_csv(
            dir.path(),
            "old.csv",
            "Cost Group,Name,Extended Cost\nDemo,Labor,$500.00\n",
        );
        let new = write_csv(
            dir.path(),
            "new.csv",
            "Cost Group,Name,Extended Cost\nDemo,Labor,$600.00\n",
        );

        let mut cfg = config(old.clone(), new.clone(), false);
        cfg.output.file = Some(dir.path().join("report.json"));
        assert_eq!(run_diff(&cfg).unwrap(), exit_codes::SUCCESS);

        let mut cfg = config(old.clone(), old, true);
        cfg.output.file = Some(dir.path().join("same.json"));
        assert_eq!(run_diff(&cfg).unwrap(), exit_codes::SUCCESS);

        let mut cfg = config(
            write_csv(
                dir.path(),
                "old2.csv",
                "Cost Group,Name,Extended Cost\nDemo,Labor,$500.00\n",
            ),
            new,
            true,
        );
        cfg.output.file = Some(dir.path().join("changed.json"));
        assert_eq!(run_diff(&cfg).unwrap(), exit_codes::CHANGES_DETECTED);
    }

    #[test]
    fn test_run_diff_missing_input_is_an_error() {
        let cfg = config(
            std::path::PathBuf::from("/no/such/old.csv"),
            std::path::PathBuf::from("/no/such/new.csv"),
            false,
        );
        assert!(run_diff(&cfg).is_err());
    }
}
