//! Fixed inspector configuration.
//!
//! The binaries never consult arguments or the environment: every run uses
//! [`InspectorConfig::default`]. The builder overrides exist so tests and
//! library callers can point the pipeline at a scratch directory.

use std::path::{Path, PathBuf};

/// Directory holding one subdirectory per catalog category.
pub const DEFAULT_BASE_DIR: &str = "src/factories";
/// Entries ending with this suffix mark a category as producing output.
pub const MARKER_EXTENSION: &str = ".rs";
/// Where the status document is written, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "factories_status.json";
pub const LAST_MAINTENANCE: &str = "2026-01-31";
pub const NEXT_MAINTENANCE: &str = "2026-02-15";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Paths and constants shared by the inspector, classifier, and reporter.
pub struct InspectorConfig {
    pub base_dir: PathBuf,
    pub marker_extension: String,
    pub output_path: PathBuf,
    pub last_maintenance: String,
    pub next_maintenance: String,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            marker_extension: MARKER_EXTENSION.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            last_maintenance: LAST_MAINTENANCE.to_string(),
            next_maintenance: NEXT_MAINTENANCE.to_string(),
        }
    }
}

impl InspectorConfig {
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Directory expected to hold the given category's output.
    pub fn category_dir(&self, category_id: &str) -> PathBuf {
        self.base_dir.join(category_id)
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
