//! End-to-end run: load, clean, aggregate, report, export, merge, break down.

use std::fs;
use std::io::Write;

use tracing::info;

use crate::analyzers::aggregate::YearTables;
use crate::analyzers::carrier::carrier_breakdown;
use crate::analyzers::merge::merge_by_day;
use crate::analyzers::types::CarrierCategory;
use crate::cleaner::{PackageRecord, clean};
use crate::config::{PipelineConfig, SourceYear};
use crate::error::{PipelineError, Result};
use crate::loader::{LoadedFile, check_inputs, load_records};
use crate::output::{export_carrier_breakdown, export_merged_by_day, export_year_tables};
use crate::report::print_report;
use crate::stats::{RunSummary, YearSummary};

/// Runs the whole pipeline, writing the console report to `out`.
///
/// Both inputs are checked and read before anything is written. A write
/// failure stops the run and leaves earlier outputs in place.
#[tracing::instrument(skip_all, fields(data_dir = %config.data_dir.display(), clean_dir = %config.clean_dir.display()))]
pub fn run<W: Write>(config: &PipelineConfig, out: &mut W) -> Result<RunSummary> {
    check_inputs(config)?;

    let loaded_2324 = load_records(&config.input_path(SourceYear::Y2324))?;
    let loaded_2425 = load_records(&config.input_path(SourceYear::Y2425))?;

    let mut summary = RunSummary::default();
    let (year_2324, tables_2324) = prepare_year(SourceYear::Y2324, loaded_2324, &mut summary);
    let (year_2425, tables_2425) = prepare_year(SourceYear::Y2425, loaded_2425, &mut summary);
    let year_tables = [tables_2324, tables_2425];

    print_report(out, &year_tables).map_err(PipelineError::Report)?;

    for dir in config.output_dirs() {
        fs::create_dir_all(dir).map_err(|e| PipelineError::io(dir, e))?;
    }

    for tables in &year_tables {
        export_year_tables(config, tables, &mut summary)?;
    }

    let merged = merge_by_day(&year_2324, &year_2425);
    export_merged_by_day(config, &merged, &mut summary)?;
    summary.merged_days = merged.rows.len();
    summary.outside_academic_years = merged.outside_academic_years;

    let breakdown = carrier_breakdown(&year_2324, &year_2425);
    export_carrier_breakdown(config, &breakdown, &mut summary)?;
    summary.carrier_days = breakdown.rows.len();
    summary.other_carrier_packages = breakdown.category_total(CarrierCategory::Other);

    info!(
        packages = summary.total_packages(),
        files = summary.files_written.len(),
        "Pipeline complete"
    );
    Ok(summary)
}

/// Cleans one export and builds its count tables.
fn prepare_year(
    year: SourceYear,
    loaded: LoadedFile,
    summary: &mut RunSummary,
) -> (Vec<PackageRecord>, YearTables) {
    let (records, cleaning) = clean(loaded.records, year);
    let tables = YearTables::from_records(year, &records);
    summary.years.push(YearSummary {
        year: year.label().to_string(),
        undecodable_rows: loaded.undecodable,
        cleaning,
        total_packages: tables.total(),
        months: tables.monthly.len(),
        weeks: tables.weekly.len(),
        days: tables.daily.len(),
    });
    (records, tables)
}
