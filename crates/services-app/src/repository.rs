//! Workbook and scenario file access

use std::path::{Path, PathBuf};

use services_domain::{ScenarioEntry, ServiceCatalog};
use services_types::{Error, Result};

use crate::config::{Config, DEFAULT_WORKBOOK};

/// Resolve the workbook path: CLI flag, then config, then the default
pub fn resolve_workbook_path(config: &Config, cli_path: Option<&Path>) -> PathBuf {
    cli_path
        .map(Path::to_path_buf)
        .or_else(|| config.workbook.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_WORKBOOK))
}

/// Open the service catalog from the resolved workbook
pub fn open_catalog(config: &Config, cli_path: Option<&Path>) -> Result<ServiceCatalog> {
    let path = resolve_workbook_path(config, cli_path);
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    services_infra::workbook::load_catalog(&path).map_err(|e| Error::Workbook(e.to_string()))
}

/// Load scenario entries from a CSV file
pub fn load_scenario(path: &Path) -> Result<Vec<ScenarioEntry>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    services_infra::scenario_csv::load_scenario(path).map_err(|e| Error::Scenario(e.to_string()))
}
