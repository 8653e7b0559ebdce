//! Status document and console transcript.
//!
//! The document is a pretty-printed JSON array (two-space indentation, UTF-8
//! written verbatim) that overwrites any previous run. A failed write is
//! returned to the caller and ends the run; there is no partial-write recovery.

use crate::classify::StatusLabel;
use crate::record::StatusRecord;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub const STARTED_MESSAGE: &str = "🔄 تحديث حالة المصانع في الواجهة...";
const TRANSCRIPT_HEADER: &str = "✅ تم تحديث حالة المصانع:";
const SUMMARY_HEADER: &str = "📊 ملخص:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
/// Number of records per status label.
pub struct StatusSummary {
    pub running: usize,
    pub maintenance: usize,
    pub error: usize,
}

impl StatusSummary {
    pub fn count(&self, status: StatusLabel) -> usize {
        match status {
            StatusLabel::Running => self.running,
            StatusLabel::Maintenance => self.maintenance,
            StatusLabel::Error => self.error,
        }
    }

    pub fn total(&self) -> usize {
        self.running + self.maintenance + self.error
    }
}

pub fn summarize(records: &[StatusRecord]) -> StatusSummary {
    records
        .iter()
        .fold(StatusSummary::default(), |mut summary, record| {
            match record.status {
                StatusLabel::Running => summary.running += 1,
                StatusLabel::Maintenance => summary.maintenance += 1,
                StatusLabel::Error => summary.error += 1,
            }
            summary
        })
}

pub fn status_glyph(status: StatusLabel) -> &'static str {
    match status {
        StatusLabel::Running => "✅",
        StatusLabel::Maintenance => "🟠",
        StatusLabel::Error => "🔴",
    }
}

/// Localized label used in the transcript summary.
pub fn status_caption(status: StatusLabel) -> &'static str {
    match status {
        StatusLabel::Running => "نشط",
        StatusLabel::Maintenance => "صيانة",
        StatusLabel::Error => "خطأ",
    }
}

/// Serialize `records` and overwrite the document at `path`.
pub fn write_status_document(path: &Path, records: &[StatusRecord]) -> Result<()> {
    let mut body =
        serde_json::to_string_pretty(records).context("Unable to serialize status records")?;
    body.push('\n');
    fs::write(path, body)
        .with_context(|| format!("Unable to write status document {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "status document written"
    );
    Ok(())
}

/// Read a previously written status document.
pub fn load_status_document(path: &Path) -> Result<Vec<StatusRecord>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Unable to read status document {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Unable to parse status document {}", path.display()))
}

/// Human-readable listing of every record followed by the per-status counts.
pub fn render_transcript(records: &[StatusRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TRANSCRIPT_HEADER}");
    for record in records {
        let _ = writeln!(
            out,
            "{} {}: {}% كفاءة، {} ملفات",
            status_glyph(record.status),
            record.name,
            record.efficiency,
            record.files_count,
        );
    }

    let summary = summarize(records);
    let _ = writeln!(out);
    let _ = writeln!(out, "{SUMMARY_HEADER}");
    for status in StatusLabel::ALL {
        let _ = writeln!(
            out,
            "• {} {}: {}",
            status_glyph(status),
            status_caption(status),
            summary.count(status)
        );
    }
    out
}
