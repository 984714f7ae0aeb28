//! Report output routing.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

/// Where a generated report goes.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Write to standard output
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Build a target from an optional file path.
    #[must_use]
    pub fn from_option(file: Option<PathBuf>) -> Self {
        file.map_or(Self::Stdout, Self::File)
    }
}

/// Whether ANSI colors should be used for this target.
///
/// Colors only make sense on a stdout that is a terminal, and never in
/// files.
#[must_use]
pub fn should_use_color(target: &OutputTarget, no_color: bool) -> bool {
    if no_color {
        return false;
    }
    match target {
        OutputTarget::Stdout => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        OutputTarget::File(_) => false,
    }
}

/// Write a rendered report to its target.
pub fn write_output(target: &OutputTarget, report: &str) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(report.as_bytes())
                .context("Failed to write report to stdout")?;
            if !report.ends_with('\n') {
                let _ = stdout.write_all(b"\n");
            }
        }
        OutputTarget::File(path) => {
            std::fs::write(path, report)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_target_conversion() {
        assert!(matches!(OutputTarget::from_option(None), OutputTarget::Stdout));
        assert!(matches!(
            OutputTarget::from_option(Some(PathBuf::from("/tmp/report.json"))),
            OutputTarget::File(_)
        ));
    }

    #[test]
    fn test_no_color_flag_wins() {
        assert!(!should_use_color(&OutputTarget::Stdout, true));
        assert!(!should_use_color(
            &OutputTarget::File(PathBuf::from("r.md")),
            false
        ));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        write_output(&OutputTarget::File(path.clone()), "hello").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }
}
