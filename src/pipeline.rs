//! Catalog → inspector → classifier pass.
//!
//! Runs once, sequentially, in catalog order. Categories are independent: a
//! failure while inspecting one only degrades that category's record.

use crate::catalog::{CategoryDescriptor, record_id};
use crate::classify::classify;
use crate::config::InspectorConfig;
use crate::inspect::inspect_category;
use crate::record::StatusRecord;
use rand::Rng;

/// Build one status record per descriptor, preserving catalog order.
pub fn build_records<R: Rng>(
    config: &InspectorConfig,
    catalog: &[CategoryDescriptor],
    rng: &mut R,
) -> Vec<StatusRecord> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, descriptor)| {
            let inspection = inspect_category(config, descriptor);
            let classification = classify(&inspection, rng);
            tracing::debug!(
                category = descriptor.id,
                exists = inspection.exists,
                entries = inspection.entry_count,
                status = %classification.status,
                "classified category"
            );
            StatusRecord::new(
                record_id(index),
                descriptor,
                &inspection,
                &classification,
                config,
            )
        })
        .collect()
}
