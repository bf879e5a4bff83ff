//! CSV export of count tables and merged tables, plus the run summary.
//!
//! Every file is truncated and rewritten in full on each run.

use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;
use tracing::{debug, info};

use crate::analyzers::aggregate::YearTables;
use crate::analyzers::carrier::CarrierBreakdown;
use crate::analyzers::merge::MergedByDay;
use crate::analyzers::types::{AcademicYear, CarrierCategory};
use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::stats::RunSummary;

/// Logs the run summary as pretty-printed JSON.
pub fn print_json(summary: &RunSummary) -> anyhow::Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Writes `header` then one row per item, replacing any existing file.
///
/// The header is written even when there are no rows.
pub fn write_rows<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<()> {
    debug!(path = %path.display(), rows = rows.len(), "Writing CSV");

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| PipelineError::csv(path, e))?;

    writer
        .write_record(header)
        .map_err(|e| PipelineError::csv(path, e))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| PipelineError::csv(path, e))?;
    }
    writer.flush().map_err(|e| PipelineError::io(path, e))?;

    info!(path = %path.display(), rows = rows.len(), "Exported");
    Ok(())
}

/// Writes the monthly, weekly and daily tables for one year.
pub fn export_year_tables(
    config: &PipelineConfig,
    tables: &YearTables,
    summary: &mut RunSummary,
) -> Result<()> {
    for (granularity, rows) in tables.tables() {
        let path = config.count_table_path(granularity.file_prefix(), tables.year);
        write_rows(&path, &[granularity.key_column(), "Count"], &rows)?;
        summary.record_file(&path);
    }
    Ok(())
}

/// Writes `merged_by_day.csv`.
pub fn export_merged_by_day(
    config: &PipelineConfig,
    merged: &MergedByDay,
    summary: &mut RunSummary,
) -> Result<()> {
    let path = config.merged_by_day_path();
    let mut header = vec!["Date"];
    header.extend(AcademicYear::ALL.iter().map(|year| year.column()));
    write_rows(&path, &header, &merged.rows)?;
    summary.record_file(&path);
    Ok(())
}

/// Writes `merged_by_day_carrier.csv`.
pub fn export_carrier_breakdown(
    config: &PipelineConfig,
    breakdown: &CarrierBreakdown,
    summary: &mut RunSummary,
) -> Result<()> {
    let path = config.merged_by_day_carrier_path();
    let mut header = vec!["Date"];
    header.extend(CarrierCategory::ALL.iter().map(|c| c.as_str()));
    header.push("Total");
    write_rows(&path, &header, &breakdown.rows)?;
    summary.record_file(&path);
    Ok(())
}
