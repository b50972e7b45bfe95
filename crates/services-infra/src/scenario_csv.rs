//! CSV loader for scenario files
//!
//! Expected header: Service,Utility,Level,Quantity (case-insensitive).
//! An empty Level defaults to 1 and an empty Quantity to 0.

use std::path::Path;

use thiserror::Error;

use services_domain::ScenarioEntry;

#[derive(Error, Debug)]
pub enum ScenarioCsvError {
    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid number in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}

struct ColumnIndices {
    service: usize,
    utility: usize,
    level: usize,
    quantity: usize,
}

/// Load scenario entries from a CSV file
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioEntry>, ScenarioCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let columns = resolve_columns(&headers)?;

    let mut entries = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 2; // header is row 1

        let service = record.get(columns.service).unwrap_or("").to_string();
        let utility = record.get(columns.utility).unwrap_or("").to_string();
        if service.is_empty() && utility.is_empty() {
            continue;
        }

        let level = parse_u32(record.get(columns.level).unwrap_or(""), row_num, "Level", 1)?;
        let quantity = parse_u32(
            record.get(columns.quantity).unwrap_or(""),
            row_num,
            "Quantity",
            0,
        )?;

        entries.push(ScenarioEntry {
            service,
            utility,
            level,
            quantity,
        });
    }

    Ok(entries)
}

fn resolve_columns(headers: &csv::StringRecord) -> Result<ColumnIndices, ScenarioCsvError> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| ScenarioCsvError::MissingColumn(name.to_string()))
    };

    Ok(ColumnIndices {
        service: find("Service")?,
        utility: find("Utility")?,
        level: find("Level")?,
        quantity: find("Quantity")?,
    })
}

fn parse_u32(s: &str, row: usize, column: &str, default: u32) -> Result<u32, ScenarioCsvError> {
    let cleaned = s.trim().replace(',', "");
    if cleaned.is_empty() {
        return Ok(default);
    }

    cleaned
        .parse()
        .map_err(|_| ScenarioCsvError::InvalidNumber {
            row,
            column: column.to_string(),
            value: s.to_string(),
        })
}
