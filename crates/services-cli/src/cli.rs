//! CLI definition using clap

use clap::{Parser, Subcommand};
use services_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "services-calc")]
#[command(version)]
#[command(about = "Services 2.0 build plan and scenario calculator")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the canonical workbook (overrides config)
    #[arg(long, short = 'w', global = true)]
    pub workbook: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List services and their utilities
    Services,

    /// Compute total homes and per-service demand from home counts
    Demand {
        /// Home counts as CLASS=COUNT pairs (e.g. "omega=12" "old-town=3")
        #[arg(required = true)]
        homes: Vec<String>,
    },

    /// Quick plan with one chosen utility per service
    Plan {
        /// Demand per service
        #[arg(long, conflicts_with = "homes")]
        demand: Option<f64>,

        /// Home counts as CLASS=COUNT pairs (alternative to --demand)
        #[arg(long)]
        homes: Vec<String>,

        /// Utility choice as SERVICE=UTILITY[@LEVEL], repeatable.
        /// Level defaults to the utility's MaxLevel.
        #[arg(long = "choose", short = 'c')]
        choices: Vec<String>,

        /// Write the plan to an Excel file
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// Least-cost plan across every utility/level combination
    Optimize {
        /// Demand per service
        #[arg(long, conflicts_with = "homes")]
        demand: Option<f64>,

        /// Home counts as CLASS=COUNT pairs (alternative to --demand)
        #[arg(long)]
        homes: Vec<String>,

        /// Write the plan to an Excel file
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// Evaluate a scenario CSV (Service,Utility,Level,Quantity)
    Scenario {
        /// Path to the scenario CSV file
        csv: PathBuf,

        /// Write the evaluation to an Excel file
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// Compare scenario CSVs, cheapest first
    Compare {
        /// Paths to scenario CSV files
        #[arg(required = true)]
        csvs: Vec<PathBuf>,

        /// Demand target for the coverage check
        #[arg(long)]
        demand: Option<f64>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the default workbook path
        #[arg(long)]
        set_workbook: Option<PathBuf>,

        /// Set the default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
