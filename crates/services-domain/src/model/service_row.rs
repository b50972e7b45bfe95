//! Workbook row type definitions

use serde::{Deserialize, Serialize};

/// One row of the workbook's `Data` sheet: a building at a specific upgrade
/// level, with its capacity and cumulative cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRow {
    /// Utility category consumed by homes (e.g. "Fusion")
    pub service: String,
    /// Specific plant/utility type providing the service
    pub building: String,
    /// Upgrade tier of the building (1-based)
    pub level: u32,
    /// Capacity provided at this level
    pub capacity: f64,
    /// Cumulative cost to reach this level
    pub cum_cost: f64,
    /// Highest level available for this building
    pub max_level: u32,
}
