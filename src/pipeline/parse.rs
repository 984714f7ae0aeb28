//! Snapshot loading with contextual error messages.

use crate::model::Snapshot;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse a snapshot file with context for error messages.
pub fn parse_snapshot_with_context(path: &Path, quiet: bool) -> Result<Snapshot> {
    if !quiet {
        tracing::info!("Parsing snapshot: {}", path.display());
    }

    let snapshot = crate::parsers::parse_snapshot(path)
        .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;

    if !quiet {
        tracing::info!("Parsed {} items", snapshot.item_count());
    }

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_parse_with_context_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Cost Group,Name\nDemo,Labor").unwrap();

        let snapshot = parse_snapshot_with_context(file.path(), true).unwrap();
        assert_eq!(snapshot.item_count(), 1);
        assert_eq!(snapshot.items[0].name, "Labor");
    }

    #[test]
    fn test_missing_file_error_mentions_path() {
        let err = parse_snapshot_with_context(Path::new("/no/such/backup.csv"), true)
            .unwrap_err();
        assert!(format!("{err:#}").contains("backup.csv"));
    }
}
