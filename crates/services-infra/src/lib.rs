//! Infrastructure layer - file loaders for services-calc

pub mod scenario_csv;
pub mod workbook;
