//! Scenario evaluation and comparison
//!
//! A scenario is a mix of (service, utility, level, quantity) entries. Rows
//! naming combinations the table does not carry are reported, not rejected.

use serde::{Deserialize, Serialize};

use crate::catalog::ServiceCatalog;
use crate::model::ScenarioEntry;
use crate::service::planner::{fmt_amount, truncate_str};

/// Whether a scenario entry resolved against the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    Ok,
    NotFound,
}

impl std::fmt::Display for RowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowStatus::Ok => write!(f, "OK"),
            RowStatus::NotFound => write!(f, "Not found"),
        }
    }
}

/// One evaluated scenario entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioLine {
    pub service: String,
    pub utility: String,
    pub level: u32,
    pub quantity: u32,
    pub capacity_at_level: Option<f64>,
    pub cost_at_level: Option<f64>,
    pub row_capacity: Option<f64>,
    pub row_cost: Option<f64>,
    pub status: RowStatus,
}

/// Evaluated scenario with totals over the resolved rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub lines: Vec<ScenarioLine>,
    pub total_capacity: f64,
    pub total_cost: f64,
    pub not_found: usize,
}

pub fn evaluate_scenario(catalog: &ServiceCatalog, entries: &[ScenarioEntry]) -> ScenarioSummary {
    let lines: Vec<ScenarioLine> = entries
        .iter()
        .map(|entry| {
            match catalog.lookup(&entry.service, &entry.utility, entry.level) {
                Some(row) => ScenarioLine {
                    service: entry.service.clone(),
                    utility: entry.utility.clone(),
                    level: entry.level,
                    quantity: entry.quantity,
                    capacity_at_level: Some(row.capacity),
                    cost_at_level: Some(row.cum_cost),
                    row_capacity: Some(row.capacity * f64::from(entry.quantity)),
                    row_cost: Some(row.cum_cost * f64::from(entry.quantity)),
                    status: RowStatus::Ok,
                },
                None => ScenarioLine {
                    service: entry.service.clone(),
                    utility: entry.utility.clone(),
                    level: entry.level,
                    quantity: entry.quantity,
                    capacity_at_level: None,
                    cost_at_level: None,
                    row_capacity: None,
                    row_cost: None,
                    status: RowStatus::NotFound,
                },
            }
        })
        .collect();

    let total_capacity = lines.iter().filter_map(|l| l.row_capacity).sum();
    let total_cost = lines.iter().filter_map(|l| l.row_cost).sum();
    let not_found = lines
        .iter()
        .filter(|l| l.status == RowStatus::NotFound)
        .count();

    ScenarioSummary {
        lines,
        total_capacity,
        total_cost,
        not_found,
    }
}

/// Scenario ranking entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub name: String,
    pub total_capacity: f64,
    pub total_cost: f64,
    pub not_found: usize,
    /// Set when a demand target was supplied
    pub covers_demand: Option<bool>,
}

/// Compare named scenarios, cheapest first
pub fn compare_scenarios(
    catalog: &ServiceCatalog,
    scenarios: &[(String, Vec<ScenarioEntry>)],
    demand: Option<f64>,
) -> Vec<ScenarioComparison> {
    let mut comparisons: Vec<ScenarioComparison> = scenarios
        .iter()
        .map(|(name, entries)| {
            let summary = evaluate_scenario(catalog, entries);
            ScenarioComparison {
                name: name.clone(),
                total_capacity: summary.total_capacity,
                total_cost: summary.total_cost,
                not_found: summary.not_found,
                covers_demand: demand.map(|d| summary.total_capacity >= d),
            }
        })
        .collect();

    comparisons.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));
    comparisons
}

pub fn generate_scenario_report(summary: &ScenarioSummary) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("                 Scenario Report                  \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Entries:         {}\n", summary.lines.len()));
    report.push_str(&format!("  Unresolved:      {}\n", summary.not_found));
    report.push_str(&format!(
        "  Total capacity:  {}\n",
        fmt_amount(summary.total_capacity)
    ));
    report.push_str(&format!(
        "  Total cost:      {}\n",
        fmt_amount(summary.total_cost)
    ));
    report.push('\n');

    if !summary.lines.is_empty() {
        report.push_str("[Entries]\n");
        report.push_str("-".repeat(88).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<14} {:<20} {:>4} {:>4} {:>10} {:>10} {:>10} {:<9}\n",
            "Service", "Utility", "Lvl", "Qty", "Capacity", "Cost", "RowCost", "Status"
        ));
        report.push_str("-".repeat(88).as_str());
        report.push('\n');
        for line in &summary.lines {
            report.push_str(&format!(
                "{:<14} {:<20} {:>4} {:>4} {:>10} {:>10} {:>10} {:<9}\n",
                truncate_str(&line.service, 13),
                truncate_str(&line.utility, 19),
                line.level,
                line.quantity,
                line.capacity_at_level.map_or("-".to_string(), fmt_amount),
                line.cost_at_level.map_or("-".to_string(), fmt_amount),
                line.row_cost.map_or("-".to_string(), fmt_amount),
                line.status,
            ));
        }
    }

    report.push_str("\n==================================================\n");
    report
}
