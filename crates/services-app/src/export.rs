//! Excel export functionality

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use services_domain::service::{BuildPlan, ScenarioSummary};
use services_types::{Error, Result};

/// Export a build plan to an Excel file
pub fn export_plan_to_excel(plan: &BuildPlan, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    write_plan_sheet(sheet, plan)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

/// Export a scenario evaluation to an Excel file
pub fn export_scenario_to_excel(summary: &ScenarioSummary, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    write_scenario_sheet(sheet, summary)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_plan_sheet(sheet: &mut Worksheet, plan: &BuildPlan) -> Result<()> {
    sheet
        .set_name("Build Plan")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Services 2.0 Build Plan", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(2, 0, "Generated:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(2, 1, &chrono::Local::now().to_rfc3339())
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(3, 0, "Demand per service:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(3, 1, plan.demand)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(4, 0, "Total buildings:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(4, 1, plan.total_buildings() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(5, 0, "Total cost:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(5, 1, plan.total_cost())
        .map_err(|e| Error::Excel(e.to_string()))?;

    let headers = [
        "Service",
        "Utility",
        "Level",
        "Capacity @ Level",
        "Buildings Needed",
        "Spare Capacity",
        "Cost per Building",
        "Total Cost",
    ];
    let header_row = 7;
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(header_row, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, line) in plan.lines.iter().enumerate() {
        let row = header_row + 1 + row_idx as u32;

        sheet
            .write_string(row, 0, &line.service)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, &line.utility)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 2, f64::from(line.level))
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 3, line.capacity)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 4, line.buildings_needed as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 5, line.spare_capacity)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 6, line.cost_per_building)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 7, line.total_cost)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(0, 18)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 24)
        .map_err(|e| Error::Excel(e.to_string()))?;
    for col in 3..8 {
        sheet
            .set_column_width(col, 16)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}

fn write_scenario_sheet(sheet: &mut Worksheet, summary: &ScenarioSummary) -> Result<()> {
    sheet
        .set_name("Scenario")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Services 2.0 Scenario", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(2, 0, "Generated:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(2, 1, &chrono::Local::now().to_rfc3339())
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(3, 0, "Total capacity:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(3, 1, summary.total_capacity)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(4, 0, "Total cost:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(4, 1, summary.total_cost)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(5, 0, "Unresolved rows:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(5, 1, summary.not_found as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let headers = [
        "Service",
        "Utility",
        "Level",
        "Quantity",
        "Capacity @ Level",
        "Cost @ Level",
        "Row Capacity",
        "Row Cost",
        "Status",
    ];
    let header_row = 7;
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(header_row, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, line) in summary.lines.iter().enumerate() {
        let row = header_row + 1 + row_idx as u32;

        sheet
            .write_string(row, 0, &line.service)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, &line.utility)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 2, f64::from(line.level))
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 3, f64::from(line.quantity))
            .map_err(|e| Error::Excel(e.to_string()))?;

        let numeric_columns = [
            (4, line.capacity_at_level),
            (5, line.cost_at_level),
            (6, line.row_capacity),
            (7, line.row_cost),
        ];
        for (col, value) in numeric_columns {
            if let Some(value) = value {
                sheet
                    .write_number(row, col, value)
                    .map_err(|e| Error::Excel(e.to_string()))?;
            }
        }

        sheet
            .write_string(row, 8, line.status.to_string())
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(0, 18)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 24)
        .map_err(|e| Error::Excel(e.to_string()))?;
    for col in 4..9 {
        sheet
            .set_column_width(col, 16)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}
