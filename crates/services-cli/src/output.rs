//! Output formatting module

use serde_json::json;

use services_domain::service::{
    generate_plan_report, generate_scenario_report, BuildPlan, DemandSummary, HomeClass,
    ScenarioComparison, ScenarioSummary,
};
use services_domain::ServiceCatalog;
use services_types::{OutputFormat, Result};

pub fn output_services(output_format: OutputFormat, catalog: &ServiceCatalog) -> Result<()> {
    if output_format == OutputFormat::Json {
        let services: Vec<_> = catalog
            .services()
            .iter()
            .map(|service| {
                let utilities: Vec<_> = catalog
                    .utilities_for(service)
                    .iter()
                    .map(|utility| {
                        json!({
                            "name": utility,
                            "max_level": catalog.max_level(service, utility),
                        })
                    })
                    .collect();
                json!({ "service": service, "utilities": utilities })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&services)?);
    } else {
        let services = catalog.services();
        println!("\nServices ({})", services.len());
        println!("============");
        for service in &services {
            println!("\n{}", service);
            for utility in catalog.utilities_for(service) {
                let max_level = catalog.max_level(service, &utility).unwrap_or(1);
                println!("  - {} (levels 1-{})", utility, max_level);
            }
        }
    }

    Ok(())
}

pub fn output_demand(
    output_format: OutputFormat,
    counts: &[(HomeClass, u32)],
    summary: &DemandSummary,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let homes: Vec<_> = counts
            .iter()
            .map(|(class, count)| {
                json!({
                    "class": class.label(),
                    "count": count,
                    "demand": u64::from(*count) * u64::from(class.demand_per_home()),
                })
            })
            .collect();
        let content = json!({
            "homes": homes,
            "total_homes": summary.total_homes,
            "total_demand": summary.total_demand,
        });
        println!("{}", serde_json::to_string_pretty(&content)?);
    } else {
        println!("\nDemand");
        println!("======");
        for (class, count) in counts {
            println!(
                "  {:<20} {:>6} x {:>2} = {}",
                class.label(),
                count,
                class.demand_per_home(),
                u64::from(*count) * u64::from(class.demand_per_home())
            );
        }
        println!();
        println!("  Total homes:              {}", summary.total_homes);
        println!("  Total demand per service: {}", summary.total_demand);
    }

    Ok(())
}

pub fn output_plan(output_format: OutputFormat, plan: &BuildPlan) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(plan)?);
    } else {
        println!("{}", generate_plan_report(plan));
    }

    Ok(())
}

pub fn output_scenario(output_format: OutputFormat, summary: &ScenarioSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        println!("{}", generate_scenario_report(summary));
    }

    Ok(())
}

pub fn output_comparisons(
    output_format: OutputFormat,
    comparisons: &[ScenarioComparison],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(comparisons)?);
    } else {
        println!("\nScenario Comparison (cheapest first)");
        println!("====================================");
        println!(
            "{:<4} {:<24} {:>12} {:>12} {:>10} {:>8}",
            "#", "Scenario", "Capacity", "Cost", "Covers?", "Missing"
        );
        for (idx, c) in comparisons.iter().enumerate() {
            let covers = match c.covers_demand {
                Some(true) => "yes",
                Some(false) => "no",
                None => "-",
            };
            println!(
                "{:<4} {:<24} {:>12.0} {:>12.0} {:>10} {:>8}",
                idx + 1,
                c.name,
                c.total_capacity,
                c.total_cost,
                covers,
                c.not_found
            );
        }
    }

    Ok(())
}
