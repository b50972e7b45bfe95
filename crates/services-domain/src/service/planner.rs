//! Build plan calculation
//!
//! Given a demand figure, work out how many buildings of a chosen utility and
//! level are required per service, or search every (utility, level)
//! combination for the cheapest way to cover the demand.

use serde::{Deserialize, Serialize};
use services_types::{Error, Result};

use crate::catalog::ServiceCatalog;

/// Buildings required to cover `demand` at `capacity` each. Zero when the
/// capacity is not positive, matching the workbook's own helper.
pub fn ceil_div(demand: f64, capacity: f64) -> u64 {
    if capacity <= 0.0 {
        return 0;
    }
    (demand / capacity).ceil() as u64
}

/// User selection of one utility (and optionally a level) for a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityChoice {
    pub service: String,
    pub utility: String,
    /// Defaults to the utility's MaxLevel when not given
    pub level: Option<u32>,
}

/// Plan for a single service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanLine {
    pub service: String,
    pub utility: String,
    pub level: u32,
    pub capacity: f64,
    pub buildings_needed: u64,
    pub spare_capacity: f64,
    pub cost_per_building: f64,
    pub total_cost: f64,
}

/// Plan across all services for one demand figure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildPlan {
    pub demand: f64,
    pub lines: Vec<PlanLine>,
}

impl BuildPlan {
    pub fn total_buildings(&self) -> u64 {
        self.lines.iter().map(|l| l.buildings_needed).sum()
    }

    pub fn total_cost(&self) -> f64 {
        self.lines.iter().map(|l| l.total_cost).sum()
    }
}

fn plan_line(
    service: &str,
    utility: &str,
    level: u32,
    capacity: f64,
    cum_cost: f64,
    demand: f64,
) -> PlanLine {
    let needed = ceil_div(demand, capacity);
    PlanLine {
        service: service.to_string(),
        utility: utility.to_string(),
        level,
        capacity,
        buildings_needed: needed,
        spare_capacity: needed as f64 * capacity - demand,
        cost_per_building: cum_cost,
        total_cost: needed as f64 * cum_cost,
    }
}

/// Plan with one explicit utility per service.
///
/// Services without a choice fall back to their first utility (sorted) at
/// MaxLevel. A choice naming an unknown service, an unknown utility, or a
/// level the table does not carry is an error.
pub fn quick_plan(
    catalog: &ServiceCatalog,
    demand: f64,
    choices: &[UtilityChoice],
) -> Result<BuildPlan> {
    let services = catalog.services();

    for choice in choices {
        if !services.contains(&choice.service) {
            return Err(Error::UnknownService(choice.service.clone()));
        }
    }

    let mut lines = Vec::new();
    for service in &services {
        let choice = choices.iter().find(|c| &c.service == service);

        let (utility, level) = match choice {
            Some(c) => {
                let max_level = catalog.max_level(service, &c.utility).ok_or_else(|| {
                    Error::UnknownUtility {
                        service: service.clone(),
                        utility: c.utility.clone(),
                    }
                })?;
                (c.utility.clone(), c.level.unwrap_or(max_level))
            }
            None => {
                let utilities = catalog.utilities_for(service);
                let Some(utility) = utilities.first() else {
                    continue;
                };
                let max_level = catalog.max_level(service, utility).unwrap_or(1);
                (utility.clone(), max_level)
            }
        };

        let row = catalog.lookup(service, &utility, level).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "{} / {} has no level {}",
                service, utility, level
            ))
        })?;

        lines.push(plan_line(
            service,
            &utility,
            level,
            row.capacity,
            row.cum_cost,
            demand,
        ));
    }

    Ok(BuildPlan { demand, lines })
}

/// Least-cost plan: per service, the (utility, level) combination with the
/// lowest total cost to cover the demand. Ties go to fewer buildings, then
/// the lower level, then the utility name.
pub fn least_cost_plan(catalog: &ServiceCatalog, demand: f64) -> BuildPlan {
    let mut lines = Vec::new();

    for service in catalog.services() {
        let best = catalog
            .rows_for(&service)
            .filter(|r| r.capacity > 0.0)
            .map(|r| plan_line(&service, &r.building, r.level, r.capacity, r.cum_cost, demand))
            .min_by(|a, b| {
                a.total_cost
                    .total_cmp(&b.total_cost)
                    .then(a.buildings_needed.cmp(&b.buildings_needed))
                    .then(a.level.cmp(&b.level))
                    .then(a.utility.cmp(&b.utility))
            });

        if let Some(line) = best {
            lines.push(line);
        }
    }

    BuildPlan { demand, lines }
}

pub(crate) fn fmt_amount(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.2}", v)
    }
}

pub fn generate_plan_report(plan: &BuildPlan) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("                Build Plan Report                 \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!(
        "  Demand per service:  {}\n",
        fmt_amount(plan.demand)
    ));
    report.push_str(&format!("  Services planned:    {}\n", plan.lines.len()));
    report.push_str(&format!(
        "  Total buildings:     {}\n",
        plan.total_buildings()
    ));
    report.push_str(&format!(
        "  Total cost:          {}\n",
        fmt_amount(plan.total_cost())
    ));
    report.push('\n');

    if plan.lines.is_empty() {
        report.push_str("[No services in the catalog]\n");
    } else {
        report.push_str("[Plan]\n");
        report.push_str("-".repeat(86).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<14} {:<20} {:>4} {:>10} {:>6} {:>10} {:>8} {:>9}\n",
            "Service", "Utility", "Lvl", "Capacity", "Need", "Spare", "Cost/Bld", "Total"
        ));
        report.push_str("-".repeat(86).as_str());
        report.push('\n');
        for line in &plan.lines {
            report.push_str(&format!(
                "{:<14} {:<20} {:>4} {:>10} {:>6} {:>10} {:>8} {:>9}\n",
                truncate_str(&line.service, 13),
                truncate_str(&line.utility, 19),
                line.level,
                fmt_amount(line.capacity),
                line.buildings_needed,
                fmt_amount(line.spare_capacity),
                fmt_amount(line.cost_per_building),
                fmt_amount(line.total_cost),
            ));
        }
    }

    report.push_str("\n==================================================\n");
    report
}

pub(crate) fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ServiceRow;

    fn row(
        service: &str,
        building: &str,
        level: u32,
        capacity: f64,
        cum_cost: f64,
        max_level: u32,
    ) -> ServiceRow {
        ServiceRow {
            service: service.to_string(),
            building: building.to_string(),
            level,
            capacity,
            cum_cost,
            max_level,
        }
    }

    fn sample_catalog() -> ServiceCatalog {
        ServiceCatalog::new(vec![
            row("Water", "Pump Station", 1, 100.0, 500.0, 2),
            row("Water", "Pump Station", 2, 250.0, 1200.0, 2),
            row("Water", "Desalination Plant", 1, 400.0, 3000.0, 1),
            row("Power", "Coal Plant", 1, 300.0, 1000.0, 2),
            row("Power", "Coal Plant", 2, 600.0, 2500.0, 2),
            row("Power", "Fusion Plant", 1, 2000.0, 9000.0, 1),
        ])
    }

    #[test]
    fn test_ceil_div() {
        assert_eq!(ceil_div(1000.0, 300.0), 4);
        assert_eq!(ceil_div(900.0, 300.0), 3);
        assert_eq!(ceil_div(0.0, 300.0), 0);
        assert_eq!(ceil_div(1000.0, 0.0), 0);
        assert_eq!(ceil_div(1000.0, -5.0), 0);
    }

    #[test]
    fn test_quick_plan_defaults_to_max_level() {
        let catalog = sample_catalog();
        let plan = quick_plan(
            &catalog,
            500.0,
            &[UtilityChoice {
                service: "Water".to_string(),
                utility: "Pump Station".to_string(),
                level: None,
            }],
        )
        .unwrap();

        let water = plan.lines.iter().find(|l| l.service == "Water").unwrap();
        assert_eq!(water.level, 2);
        assert_eq!(water.buildings_needed, 2);
        assert_eq!(water.spare_capacity, 0.0);
        assert_eq!(water.total_cost, 2400.0);
    }

    #[test]
    fn test_quick_plan_unchosen_service_uses_first_utility() {
        let catalog = sample_catalog();
        let plan = quick_plan(&catalog, 500.0, &[]).unwrap();

        // "Coal Plant" sorts before "Fusion Plant"
        let power = plan.lines.iter().find(|l| l.service == "Power").unwrap();
        assert_eq!(power.utility, "Coal Plant");
        assert_eq!(power.level, 2);
    }

    #[test]
    fn test_quick_plan_rejects_unknown_service() {
        let catalog = sample_catalog();
        let err = quick_plan(
            &catalog,
            100.0,
            &[UtilityChoice {
                service: "Sewage".to_string(),
                utility: "Pump Station".to_string(),
                level: None,
            }],
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownService(_)));
    }

    #[test]
    fn test_quick_plan_rejects_unknown_utility() {
        let catalog = sample_catalog();
        let err = quick_plan(
            &catalog,
            100.0,
            &[UtilityChoice {
                service: "Water".to_string(),
                utility: "Windmill".to_string(),
                level: None,
            }],
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownUtility { .. }));
    }

    #[test]
    fn test_quick_plan_rejects_missing_level() {
        let catalog = sample_catalog();
        let err = quick_plan(
            &catalog,
            100.0,
            &[UtilityChoice {
                service: "Water".to_string(),
                utility: "Pump Station".to_string(),
                level: Some(9),
            }],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_least_cost_plan_picks_cheapest_combination() {
        let catalog = sample_catalog();
        let plan = least_cost_plan(&catalog, 500.0);

        // Power: Coal L1 needs 2 (2000), Coal L2 needs 1 (2500),
        // Fusion L1 needs 1 (9000) -> Coal L1 wins.
        let power = plan.lines.iter().find(|l| l.service == "Power").unwrap();
        assert_eq!(power.utility, "Coal Plant");
        assert_eq!(power.level, 1);
        assert_eq!(power.total_cost, 2000.0);

        // Water: Pump L1 needs 5 (2500), Pump L2 needs 2 (2400),
        // Desalination needs 2 (6000) -> Pump L2 wins.
        let water = plan.lines.iter().find(|l| l.service == "Water").unwrap();
        assert_eq!(water.utility, "Pump Station");
        assert_eq!(water.level, 2);

        assert_eq!(plan.total_cost(), 4400.0);
        assert_eq!(plan.total_buildings(), 4);
    }

    #[test]
    fn test_least_cost_plan_prefers_many_cheap_buildings() {
        let catalog = sample_catalog();
        let plan = least_cost_plan(&catalog, 350.0);

        // The minimal Water level covering 350 in one building is
        // Desalination L1 (400 @ 3000), but four Pump L1 are cheaper (2000).
        let water = plan.lines.iter().find(|l| l.service == "Water").unwrap();
        assert_eq!(water.utility, "Pump Station");
        assert_eq!(water.level, 1);
        assert_eq!(water.buildings_needed, 4);
        assert_eq!(water.total_cost, 2000.0);
    }

    #[test]
    fn test_least_cost_plan_zero_demand() {
        let catalog = sample_catalog();
        let plan = least_cost_plan(&catalog, 0.0);
        assert_eq!(plan.total_buildings(), 0);
        assert_eq!(plan.total_cost(), 0.0);
    }

    #[test]
    fn test_least_cost_plan_ignores_zero_capacity_rows() {
        let catalog = ServiceCatalog::new(vec![
            row("Water", "Broken Pump", 1, 0.0, 1.0, 1),
            row("Water", "Pump Station", 1, 100.0, 500.0, 1),
        ]);
        let plan = least_cost_plan(&catalog, 100.0);
        assert_eq!(plan.lines[0].utility, "Pump Station");
    }

    #[test]
    fn test_generate_report() {
        let catalog = sample_catalog();
        let plan = least_cost_plan(&catalog, 500.0);
        let report = generate_plan_report(&plan);
        assert!(report.contains("Build Plan Report"));
        assert!(report.contains("Pump Station"));
        assert!(report.contains("Total cost:          4400"));
    }
}
