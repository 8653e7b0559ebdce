//! Status classification for an inspected category.
//!
//! Rules are evaluated in precedence order:
//!
//! 1. Directory missing: `error`, efficiency 70, production 0, health `error`.
//! 2. Directory present without a marker file: `maintenance`, efficiency 75,
//!    production in `[50, 100)`, health `warning`.
//! 3. Otherwise: `running`, efficiency in `[80, 100]`, production in
//!    `[100, 200)`, health derived from efficiency.
//!
//! Only directory absence selects `error`. A directory that exists but could
//! not be listed was already reduced to "no entries" by the inspector and
//! therefore lands in `maintenance`.
//!
//! Efficiency and production rate come from the caller's RNG so tests can fix
//! a seed and assert the ranges.

use crate::inspect::InspectionResult;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ERROR_EFFICIENCY: u8 = 70;
pub const MAINTENANCE_EFFICIENCY: u8 = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLabel {
    Running,
    Maintenance,
    Error,
}

impl StatusLabel {
    pub const ALL: [StatusLabel; 3] = [
        StatusLabel::Running,
        StatusLabel::Maintenance,
        StatusLabel::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StatusLabel::Running => "running",
            StatusLabel::Maintenance => "maintenance",
            StatusLabel::Error => "error",
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthLabel {
    Excellent,
    Good,
    Warning,
    Error,
}

impl HealthLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            HealthLabel::Excellent => "excellent",
            HealthLabel::Good => "good",
            HealthLabel::Warning => "warning",
            HealthLabel::Error => "error",
        }
    }
}

impl fmt::Display for HealthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Status tuple produced for one inspection.
pub struct Classification {
    pub status: StatusLabel,
    /// Percentage in `0..=100`.
    pub efficiency: u8,
    pub production_rate: u32,
    pub health: HealthLabel,
}

/// Health rating for a running category.
pub fn health_for_efficiency(efficiency: u8) -> HealthLabel {
    if efficiency > 90 {
        HealthLabel::Excellent
    } else if efficiency > 80 {
        HealthLabel::Good
    } else {
        HealthLabel::Warning
    }
}

pub fn classify<R: Rng>(inspection: &InspectionResult, rng: &mut R) -> Classification {
    if !inspection.exists {
        return Classification {
            status: StatusLabel::Error,
            efficiency: ERROR_EFFICIENCY,
            production_rate: 0,
            health: HealthLabel::Error,
        };
    }

    if !inspection.has_marker {
        return Classification {
            status: StatusLabel::Maintenance,
            efficiency: MAINTENANCE_EFFICIENCY,
            production_rate: rng.gen_range(50..100),
            health: HealthLabel::Warning,
        };
    }

    let efficiency: u8 = rng.gen_range(80..=100);
    Classification {
        status: StatusLabel::Running,
        efficiency,
        production_rate: rng.gen_range(100..200),
        health: health_for_efficiency(efficiency),
    }
}
