//! Quick readiness check used by `factory-check`.
//!
//! Unlike the status pass this counts both source and documentation files and
//! never writes anything; it only tells whether each category has content yet.

use crate::catalog::CategoryDescriptor;
use crate::config::InspectorConfig;
use crate::inspect::{count_with_extensions, list_entries};
use serde::Serialize;
use std::fmt;

pub const READINESS_EXTENSIONS: &[&str] = &[".rs", ".md"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    Ready,
    NeedsFiles,
    Missing,
}

impl Readiness {
    pub fn glyph(self) -> &'static str {
        match self {
            Readiness::Ready => "✅",
            Readiness::NeedsFiles => "⚠️",
            Readiness::Missing => "❌",
        }
    }

    fn message(self) -> &'static str {
        match self {
            Readiness::Ready => "جاهز للعمل",
            Readiness::NeedsFiles => "يحتاج إنشاء ملفات",
            Readiness::Missing => "المجلد غير موجود",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadinessReport {
    pub category: &'static str,
    pub exists: bool,
    pub files: usize,
    pub readiness: Readiness,
}

impl fmt::Display for ReadinessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} ({} ملفات)",
            self.readiness.glyph(),
            self.category,
            self.readiness.message(),
            self.files
        )
    }
}

pub fn check_category(
    config: &InspectorConfig,
    descriptor: &CategoryDescriptor,
) -> ReadinessReport {
    let dir = config.category_dir(descriptor.id);
    if !dir.exists() {
        return ReadinessReport {
            category: descriptor.id,
            exists: false,
            files: 0,
            readiness: Readiness::Missing,
        };
    }

    let files = match list_entries(&dir) {
        Ok(entries) => count_with_extensions(&entries, READINESS_EXTENSIONS),
        Err(err) => {
            tracing::warn!(
                category = descriptor.id,
                error = %format!("{err:#}"),
                "directory unreadable; counting no files"
            );
            0
        }
    };

    ReadinessReport {
        category: descriptor.id,
        exists: true,
        files,
        readiness: if files > 0 {
            Readiness::Ready
        } else {
            Readiness::NeedsFiles
        },
    }
}

pub fn check_catalog(
    config: &InspectorConfig,
    catalog: &[CategoryDescriptor],
) -> Vec<ReadinessReport> {
    catalog
        .iter()
        .map(|descriptor| check_category(config, descriptor))
        .collect()
}
