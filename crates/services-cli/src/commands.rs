//! Command handlers

use std::path::{Path, PathBuf};

use services_app::config::Config;
use services_app::export::{export_plan_to_excel, export_scenario_to_excel};
use services_app::repository::{load_scenario, open_catalog, resolve_workbook_path};
use services_domain::service::{
    compare_scenarios, evaluate_scenario, least_cost_plan, quick_plan, summarize_demand,
    HomeClass, UtilityChoice,
};
use services_domain::{ScenarioEntry, ServiceCatalog};
use services_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config, override from CLI args
    let mut config = Config::load()?;
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    let output_format = config.output_format;

    match &cli.command {
        Commands::Services => {
            let catalog = open(&cli, &config)?;
            output::output_services(output_format, &catalog)
        }

        Commands::Demand { homes } => cmd_demand(output_format, homes),

        Commands::Plan {
            demand,
            homes,
            choices,
            export,
        } => cmd_plan(
            &cli,
            &config,
            output_format,
            *demand,
            homes,
            choices,
            export.as_deref(),
        ),

        Commands::Optimize {
            demand,
            homes,
            export,
        } => cmd_optimize(&cli, &config, output_format, *demand, homes, export.as_deref()),

        Commands::Scenario { csv, export } => {
            cmd_scenario(&cli, &config, output_format, csv, export.as_deref())
        }

        Commands::Compare { csvs, demand } => {
            cmd_compare(&cli, &config, output_format, csvs, *demand)
        }

        Commands::Config {
            show,
            set_workbook,
            set_output,
            reset,
        } => cmd_config(*show, set_workbook.clone(), *set_output, *reset),
    }
}

fn open(cli: &Cli, config: &Config) -> Result<ServiceCatalog> {
    if cli.verbose {
        let path = resolve_workbook_path(config, cli.workbook.as_deref());
        eprintln!("Loading workbook: {}", path.display());
    }
    let catalog = open_catalog(config, cli.workbook.as_deref())?;
    if cli.verbose {
        eprintln!(
            "Loaded {} rows across {} services",
            catalog.len(),
            catalog.services().len()
        );
    }
    Ok(catalog)
}

fn cmd_demand(output_format: OutputFormat, homes: &[String]) -> Result<()> {
    let counts = parse_homes(homes)?;
    let summary = summarize_demand(&counts);
    output::output_demand(output_format, &counts, &summary)
}

#[allow(clippy::too_many_arguments)]
fn cmd_plan(
    cli: &Cli,
    config: &Config,
    output_format: OutputFormat,
    demand: Option<f64>,
    homes: &[String],
    choices: &[String],
    export: Option<&Path>,
) -> Result<()> {
    let demand = resolve_demand(demand, homes)?;
    let catalog = open(cli, config)?;

    let choices: Vec<UtilityChoice> = choices
        .iter()
        .map(|s| parse_choice(s))
        .collect::<Result<_>>()?;

    let plan = quick_plan(&catalog, demand, &choices)?;
    output::output_plan(output_format, &plan)?;

    if let Some(path) = export {
        export_plan_to_excel(&plan, path)?;
        println!("Plan exported: {}", path.display());
    }

    Ok(())
}

fn cmd_optimize(
    cli: &Cli,
    config: &Config,
    output_format: OutputFormat,
    demand: Option<f64>,
    homes: &[String],
    export: Option<&Path>,
) -> Result<()> {
    let demand = resolve_demand(demand, homes)?;
    let catalog = open(cli, config)?;

    let plan = least_cost_plan(&catalog, demand);
    output::output_plan(output_format, &plan)?;

    if let Some(path) = export {
        export_plan_to_excel(&plan, path)?;
        println!("Plan exported: {}", path.display());
    }

    Ok(())
}

fn cmd_scenario(
    cli: &Cli,
    config: &Config,
    output_format: OutputFormat,
    csv: &Path,
    export: Option<&Path>,
) -> Result<()> {
    let catalog = open(cli, config)?;
    let entries = load_scenario(csv)?;
    if cli.verbose {
        eprintln!("Loaded {} scenario entries from {}", entries.len(), csv.display());
    }

    let summary = evaluate_scenario(&catalog, &entries);
    output::output_scenario(output_format, &summary)?;

    if let Some(path) = export {
        export_scenario_to_excel(&summary, path)?;
        println!("Scenario exported: {}", path.display());
    }

    Ok(())
}

fn cmd_compare(
    cli: &Cli,
    config: &Config,
    output_format: OutputFormat,
    csvs: &[PathBuf],
    demand: Option<f64>,
) -> Result<()> {
    let catalog = open(cli, config)?;

    let mut scenarios: Vec<(String, Vec<ScenarioEntry>)> = Vec::new();
    for csv in csvs {
        let name = csv
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("scenario")
            .to_string();
        scenarios.push((name, load_scenario(csv)?));
    }

    let comparisons = compare_scenarios(&catalog, &scenarios, demand);
    output::output_comparisons(output_format, &comparisons)
}

fn cmd_config(
    show: bool,
    set_workbook: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(path) = set_workbook {
        config.workbook = Some(path);
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }
    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}

/// Parse CLASS=COUNT pairs into home counts
fn parse_homes(args: &[String]) -> Result<Vec<(HomeClass, u32)>> {
    args.iter()
        .map(|arg| {
            let (name, count) = arg.split_once('=').ok_or_else(|| {
                Error::InvalidArgument(format!("expected CLASS=COUNT, got '{}'", arg))
            })?;
            let class = HomeClass::parse(name).ok_or_else(|| {
                let known: Vec<&str> = HomeClass::ALL.iter().map(|c| c.label()).collect();
                Error::InvalidArgument(format!(
                    "unknown home class '{}' (expected one of: {})",
                    name,
                    known.join(", ")
                ))
            })?;
            let count: u32 = count.trim().parse().map_err(|_| {
                Error::InvalidArgument(format!("invalid count in '{}'", arg))
            })?;
            Ok((class, count))
        })
        .collect()
}

/// Parse a SERVICE=UTILITY[@LEVEL] choice
fn parse_choice(s: &str) -> Result<UtilityChoice> {
    let (service, rest) = s
        .split_once('=')
        .ok_or_else(|| Error::InvalidArgument(format!("expected SERVICE=UTILITY[@LEVEL], got '{}'", s)))?;

    let (utility, level) = match rest.rsplit_once('@') {
        Some((utility, level_str)) if level_str.chars().all(|c| c.is_ascii_digit()) && !level_str.is_empty() => {
            let level: u32 = level_str.parse().map_err(|_| {
                Error::InvalidArgument(format!("invalid level in '{}'", s))
            })?;
            (utility, Some(level))
        }
        _ => (rest, None),
    };

    if service.trim().is_empty() || utility.trim().is_empty() {
        return Err(Error::InvalidArgument(format!(
            "expected SERVICE=UTILITY[@LEVEL], got '{}'",
            s
        )));
    }

    Ok(UtilityChoice {
        service: service.trim().to_string(),
        utility: utility.trim().to_string(),
        level,
    })
}

/// A demand figure from either --demand or CLASS=COUNT pairs
fn resolve_demand(demand: Option<f64>, homes: &[String]) -> Result<f64> {
    if let Some(demand) = demand {
        if demand < 0.0 || !demand.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "demand must be a non-negative number, got {}",
                demand
            )));
        }
        return Ok(demand);
    }
    if homes.is_empty() {
        return Err(Error::InvalidArgument(
            "specify a demand with --demand or --homes CLASS=COUNT".to_string(),
        ));
    }
    let counts = parse_homes(homes)?;
    Ok(summarize_demand(&counts).total_demand as f64)
}
