//! Excel workbook loader for the canonical `Data` sheet
//!
//! Expected columns: Service, Building, Level, Capacity, CumCost, MaxLevel.
//! Rows with a blank Service/Building or a non-numeric Level are dropped.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use thiserror::Error;

use services_domain::{ServiceCatalog, ServiceRow};

/// Name of the sheet carrying the reference table
pub const DATA_SHEET: &str = "Data";

const REQUIRED_COLUMNS: [&str; 6] = [
    "Service",
    "Building",
    "Level",
    "Capacity",
    "CumCost",
    "MaxLevel",
];

#[derive(Error, Debug)]
pub enum WorkbookError {
    #[error("Failed to open workbook: {0}")]
    Open(String),

    #[error("Worksheet '{0}' not found")]
    SheetNotFound(String),

    #[error("Data sheet missing columns: {0}")]
    MissingColumns(String),

    #[error("Data sheet is empty")]
    Empty,
}

struct ColumnIndices {
    service: usize,
    building: usize,
    level: usize,
    capacity: usize,
    cum_cost: usize,
    max_level: usize,
}

/// Load the `Data` sheet of an `.xlsx` workbook into a catalog
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<ServiceCatalog, WorkbookError> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: calamine::XlsxError| WorkbookError::Open(e.to_string()))?;

    if !workbook.sheet_names().iter().any(|n| n == DATA_SHEET) {
        return Err(WorkbookError::SheetNotFound(DATA_SHEET.to_string()));
    }

    let range = workbook
        .worksheet_range(DATA_SHEET)
        .map_err(|e| WorkbookError::Open(e.to_string()))?;

    let mut rows_iter = range.rows();
    let header_row = rows_iter.next().ok_or(WorkbookError::Empty)?;
    let columns = resolve_columns(header_row)?;

    let mut rows = Vec::new();
    for row in rows_iter {
        if let Some(parsed) = parse_row(row, &columns) {
            rows.push(parsed);
        }
    }

    Ok(ServiceCatalog::new(rows))
}

fn resolve_columns(header_row: &[Data]) -> Result<ColumnIndices, WorkbookError> {
    let headers: Vec<String> = header_row
        .iter()
        .map(|c| cell_string(c).unwrap_or_default())
        .collect();

    let find = |name: &str| headers.iter().position(|h| h == name);

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| find(name).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(WorkbookError::MissingColumns(missing.join(", ")));
    }

    Ok(ColumnIndices {
        service: find("Service").unwrap(),
        building: find("Building").unwrap(),
        level: find("Level").unwrap(),
        capacity: find("Capacity").unwrap(),
        cum_cost: find("CumCost").unwrap(),
        max_level: find("MaxLevel").unwrap(),
    })
}

fn parse_row(row: &[Data], columns: &ColumnIndices) -> Option<ServiceRow> {
    let service = cell_string(row.get(columns.service)?)?;
    let building = cell_string(row.get(columns.building)?)?;
    let level = cell_u32(row.get(columns.level)?)?;

    // Numeric coercion mirrors the workbook conventions: malformed amounts
    // become 0, a missing MaxLevel falls back to the row's own level.
    let capacity = row.get(columns.capacity).and_then(cell_f64).unwrap_or(0.0);
    let cum_cost = row.get(columns.cum_cost).and_then(cell_f64).unwrap_or(0.0);
    let max_level = row
        .get(columns.max_level)
        .and_then(cell_u32)
        .unwrap_or(level);

    Some(ServiceRow {
        service,
        building,
        level,
        capacity,
        cum_cost,
        max_level,
    })
}

fn cell_string(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => {
            if (f - f.round()).abs() < 1e-9 {
                Some(format!("{}", f.round() as i64))
            } else {
                Some(f.to_string())
            }
        }
        _ => None,
    }
}

fn cell_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    }
}

fn cell_u32(cell: &Data) -> Option<u32> {
    let value = cell_f64(cell)?;
    if value >= 0.0 && (value - value.round()).abs() < 1e-9 {
        Some(value.round() as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_fixture(rows: &[(&str, &str, u32, f64, f64, u32)]) -> (TempDir, PathBuf) {
        write_fixture_with_headers(
            &["Service", "Building", "Level", "Capacity", "CumCost", "MaxLevel"],
            rows,
        )
    }

    fn write_fixture_with_headers(
        headers: &[&str],
        rows: &[(&str, &str, u32, f64, f64, u32)],
    ) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("services.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(DATA_SHEET).unwrap();

        for (col, header) in headers.iter().enumerate() {
            sheet.write_string(0, col as u16, *header).unwrap();
        }
        for (idx, (service, building, level, capacity, cum_cost, max_level)) in
            rows.iter().enumerate()
        {
            let row = (idx + 1) as u32;
            sheet.write_string(row, 0, *service).unwrap();
            sheet.write_string(row, 1, *building).unwrap();
            sheet.write_number(row, 2, f64::from(*level)).unwrap();
            sheet.write_number(row, 3, *capacity).unwrap();
            sheet.write_number(row, 4, *cum_cost).unwrap();
            sheet.write_number(row, 5, f64::from(*max_level)).unwrap();
        }

        workbook.save(&path).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_catalog() {
        let (_dir, path) = write_fixture(&[
            ("Water", "Pump Station", 1, 100.0, 500.0, 2),
            ("Water", "Pump Station", 2, 250.0, 1200.0, 2),
            ("Power", "Fusion Plant", 1, 2000.0, 9000.0, 1),
        ]);
        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.services(), vec!["Power", "Water"]);

        let row = catalog.lookup("Water", "Pump Station", 2).unwrap();
        assert_eq!(row.capacity, 250.0);
        assert_eq!(row.cum_cost, 1200.0);
        assert_eq!(row.max_level, 2);
    }

    #[test]
    fn test_load_catalog_trims_names() {
        let (_dir, path) = write_fixture(&[("  Water ", " Pump Station  ", 1, 100.0, 500.0, 1)]);
        let catalog = load_catalog(&path).unwrap();
        let row = catalog.lookup("Water", "Pump Station", 1).unwrap();
        assert_eq!(row.service, "Water");
    }

    #[test]
    fn test_load_catalog_skips_blank_rows() {
        let (_dir, path) = write_fixture(&[
            ("Water", "Pump Station", 1, 100.0, 500.0, 1),
            ("", "Orphan", 1, 50.0, 10.0, 1),
            ("Power", "", 1, 50.0, 10.0, 1),
        ]);
        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_catalog_missing_columns() {
        let (_dir, path) = write_fixture_with_headers(
            &["Service", "Building", "Level"],
            &[("Water", "Pump Station", 1, 0.0, 0.0, 0)],
        );
        let err = load_catalog(&path).unwrap_err();
        match err {
            WorkbookError::MissingColumns(missing) => {
                assert!(missing.contains("Capacity"));
                assert!(missing.contains("CumCost"));
                assert!(missing.contains("MaxLevel"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_catalog_missing_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wrong.xlsx");
        let mut workbook = Workbook::new();
        workbook.add_worksheet().set_name("Other").unwrap();
        workbook.save(&path).unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, WorkbookError::SheetNotFound(_)));
    }

    #[test]
    fn test_cell_coercion() {
        assert_eq!(cell_f64(&Data::String("1,234.5".to_string())), Some(1234.5));
        assert_eq!(cell_f64(&Data::Int(7)), Some(7.0));
        assert_eq!(cell_f64(&Data::Empty), None);
        assert_eq!(cell_u32(&Data::Float(3.0)), Some(3));
        assert_eq!(cell_u32(&Data::Float(3.5)), None);
        assert_eq!(cell_u32(&Data::Float(-1.0)), None);
        assert_eq!(cell_string(&Data::Int(4)), Some("4".to_string()));
        assert_eq!(cell_string(&Data::String("  ".to_string())), None);
    }
}
