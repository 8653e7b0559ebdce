//! Directory inspection for factory categories.
//!
//! Inspection only reads directory listings; nothing under the base path is
//! ever created or modified. A path that exists but cannot be listed (no
//! permission, or not a directory at all) is logged and reported as empty so
//! the remaining categories still run.

use crate::catalog::CategoryDescriptor;
use crate::config::InspectorConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// What a single pass observed for one category directory.
pub struct InspectionResult {
    pub exists: bool,
    pub entry_count: usize,
    pub has_marker: bool,
}

impl InspectionResult {
    pub fn missing() -> Self {
        Self::default()
    }
}

/// Returns true when `name` ends with `extension` (e.g. `.rs`).
pub fn has_extension(name: &str, extension: &str) -> bool {
    name.ends_with(extension)
}

/// Count entry names that end with any of `extensions`.
pub fn count_with_extensions(entries: &[String], extensions: &[&str]) -> usize {
    entries
        .iter()
        .filter(|name| extensions.iter().any(|ext| has_extension(name, ext)))
        .count()
}

/// List the immediate entry names of `dir`, sorted for stable output.
pub fn list_entries(dir: &Path) -> Result<Vec<String>> {
    let read_dir = fs::read_dir(dir)
        .with_context(|| format!("Unable to read directory {}", dir.display()))?;
    let mut names = Vec::new();
    for entry in read_dir {
        let entry =
            entry.with_context(|| format!("Unable to read entry under {}", dir.display()))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Inspect `dir`, attributing any listing failure to `category_id` in logs.
pub fn inspect_dir(category_id: &str, dir: &Path, marker_extension: &str) -> InspectionResult {
    if !dir.exists() {
        return InspectionResult::missing();
    }

    let entries = match list_entries(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(
                category = category_id,
                path = %dir.display(),
                error = %format!("{err:#}"),
                "directory unreadable; treating as empty"
            );
            Vec::new()
        }
    };

    InspectionResult {
        exists: true,
        entry_count: entries.len(),
        has_marker: entries
            .iter()
            .any(|name| has_extension(name, marker_extension)),
    }
}

/// Inspect the directory that belongs to `descriptor` under the configured base.
pub fn inspect_category(
    config: &InspectorConfig,
    descriptor: &CategoryDescriptor,
) -> InspectionResult {
    let dir = config.category_dir(descriptor.id);
    inspect_dir(descriptor.id, &dir, &config.marker_extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_directory_reports_nothing() {
        let temp = TempDir::new().expect("tempdir");
        let result = inspect_dir("education", &temp.path().join("education"), ".rs");
        assert_eq!(result, InspectionResult::missing());
    }

    #[test]
    fn regular_file_exists_but_lists_nothing() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("creative");
        fs::write(&path, "not a dir").expect("write file");
        let result = inspect_dir("creative", &path, ".rs");
        assert!(result.exists);
        assert_eq!(result.entry_count, 0);
        assert!(!result.has_marker);
    }

    #[test]
    fn counts_every_entry_and_detects_marker() {
        let temp = TempDir::new().expect("tempdir");
        fs::write(temp.path().join("lib.rs"), "").expect("write lib.rs");
        fs::write(temp.path().join("readme.md"), "").expect("write readme.md");
        fs::create_dir(temp.path().join("nested")).expect("create nested");

        let result = inspect_dir("technology", temp.path(), ".rs");
        assert!(result.exists);
        assert_eq!(result.entry_count, 3);
        assert!(result.has_marker);
    }

    #[test]
    fn marker_must_be_a_suffix() {
        let temp = TempDir::new().expect("tempdir");
        fs::write(temp.path().join("main.rs.bak"), "").expect("write file");
        let result = inspect_dir("corporate", temp.path(), ".rs");
        assert_eq!(result.entry_count, 1);
        assert!(!result.has_marker);
    }

    #[test]
    fn count_with_extensions_matches_any_suffix() {
        let entries = vec![
            "lib.rs".to_string(),
            "notes.md".to_string(),
            "notes.txt".to_string(),
        ];
        assert_eq!(count_with_extensions(&entries, &[".rs", ".md"]), 2);
        assert_eq!(count_with_extensions(&entries, &[".py"]), 0);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_degrades_to_empty() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("tempdir");
        let dir = temp.path().join("education");
        fs::create_dir(&dir).expect("create dir");
        fs::write(dir.join("lib.rs"), "").expect("write lib.rs");
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o000)).expect("chmod");

        // Privileged users can still list the directory; nothing to observe then.
        if fs::read_dir(&dir).is_ok() {
            fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).expect("restore");
            return;
        }

        let result = inspect_dir("education", &dir, ".rs");
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).expect("restore");

        assert!(result.exists);
        assert_eq!(result.entry_count, 0);
        assert!(!result.has_marker);
    }
}
