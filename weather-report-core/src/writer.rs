//! Step 4: persist the report.

use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::info;

/// Overwrite `path` with `content` (UTF-8), creating parent directories as needed.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;

    info!(path = %path.display(), bytes = content.len(), "wrote report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("airflow").join("data").join("README.md");

        write_report(&path, "# 날씨\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# 날씨\n");
    }

    #[test]
    fn rewrite_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");

        write_report(&path, "first run, a much longer body than the second\n").unwrap();
        write_report(&path, "second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn parent_that_is_a_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("data");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_report(&blocker.join("README.md"), "x").unwrap_err();
        assert!(err.to_string().contains("Failed to create report directory"));
    }
}
