//! Scenario entry type definitions

use serde::{Deserialize, Serialize};

/// One line of a scenario mix: a quantity of a utility at a given level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEntry {
    pub service: String,
    pub utility: String,
    pub level: u32,
    pub quantity: u32,
}
