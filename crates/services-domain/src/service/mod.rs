//! Domain services

pub mod demand;
pub mod planner;
pub mod scenario;

pub use demand::{summarize_demand, DemandSummary, HomeClass};
pub use planner::{
    ceil_div, generate_plan_report, least_cost_plan, quick_plan, BuildPlan, PlanLine,
    UtilityChoice,
};
pub use scenario::{
    compare_scenarios, evaluate_scenario, generate_scenario_report, RowStatus,
    ScenarioComparison, ScenarioLine, ScenarioSummary,
};
