//! Shared library for the factory status tools.
//!
//! A run walks the fixed category catalog, inspects each category directory
//! under `src/factories/`, classifies it into a status tuple, and writes the
//! result to `factories_status.json`. The binaries (`factory-status`,
//! `factory-check`) are thin wrappers over the functions exported here.

use anyhow::Result;
use rand::Rng;

pub mod catalog;
pub mod classify;
pub mod config;
pub mod inspect;
pub mod logging;
pub mod pipeline;
pub mod readiness;
pub mod record;
pub mod report;

pub use catalog::{CATALOG, CategoryDescriptor, catalog, record_id};
pub use classify::{Classification, HealthLabel, StatusLabel, classify, health_for_efficiency};
pub use config::InspectorConfig;
pub use inspect::{InspectionResult, inspect_category, inspect_dir};
pub use pipeline::build_records;
pub use readiness::{Readiness, ReadinessReport, check_catalog};
pub use record::StatusRecord;
pub use report::{
    StatusSummary, load_status_document, render_transcript, summarize, write_status_document,
};

/// Classify every catalog category and write the status document.
///
/// Per-category problems never fail the pass; the returned error can only come
/// from writing the document, which the binary treats as fatal.
pub fn run_status_pass<R: Rng>(
    config: &InspectorConfig,
    rng: &mut R,
) -> Result<Vec<StatusRecord>> {
    let records = build_records(config, catalog(), rng);
    write_status_document(config.output_path(), &records)?;
    Ok(records)
}
