//! Serializable status record written to the status document.
//!
//! Field names are the document contract read by the dashboard; keep renames
//! explicit and mirrored in `schema/status_record.json`.

use crate::catalog::CategoryDescriptor;
use crate::classify::{Classification, HealthLabel, StatusLabel};
use crate::config::InspectorConfig;
use crate::inspect::InspectionResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One category's classified status.
pub struct StatusRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub status: StatusLabel,
    pub efficiency: u8,
    pub production_rate: u32,
    pub health: HealthLabel,
    pub files_count: usize,
    pub has_rs_files: bool,
    pub exists: bool,
    pub icon: String,
    pub last_maintenance: String,
    pub next_maintenance: String,
}

impl StatusRecord {
    /// Join a descriptor with its inspection and classification.
    pub fn new(
        id: String,
        descriptor: &CategoryDescriptor,
        inspection: &InspectionResult,
        classification: &Classification,
        config: &InspectorConfig,
    ) -> Self {
        Self {
            id,
            name: descriptor.name.to_string(),
            category: descriptor.id.to_string(),
            status: classification.status,
            efficiency: classification.efficiency,
            production_rate: classification.production_rate,
            health: classification.health,
            files_count: inspection.entry_count,
            has_rs_files: inspection.has_marker,
            exists: inspection.exists,
            icon: descriptor.icon.to_string(),
            last_maintenance: config.last_maintenance.clone(),
            next_maintenance: config.next_maintenance.clone(),
        }
    }
}
