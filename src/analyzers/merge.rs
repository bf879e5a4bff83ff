//! Cross-year daily comparison.
//!
//! Both exports are pooled and each package is re-assigned to an academic
//! year from its own date. Which file a row came from is ignored.

use tracing::{debug, info};

use crate::analyzers::types::{AcademicYear, MergedDayRow};
use crate::analyzers::utility::pivot_by_date;
use crate::cleaner::PackageRecord;

/// Result of merging both years by day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedByDay {
    pub rows: Vec<MergedDayRow>,
    /// Packages whose date falls in neither academic year.
    pub outside_academic_years: usize,
}

/// Builds the `Date,count_2324,count_2425` table from both cleaned sets.
#[tracing::instrument(skip_all, fields(rows_2324 = year_2324.len(), rows_2425 = year_2425.len()))]
pub fn merge_by_day(year_2324: &[PackageRecord], year_2425: &[PackageRecord]) -> MergedByDay {
    let mut outside = 0usize;
    let classified = year_2324
        .iter()
        .chain(year_2425)
        .filter_map(|record| match AcademicYear::from_date(record.date) {
            Some(year) => Some((record.date, year.index())),
            None => {
                debug!(date = %record.date, "Record outside both academic years");
                outside += 1;
                None
            }
        });

    let table = pivot_by_date::<2>(classified);
    let rows: Vec<MergedDayRow> = table
        .into_iter()
        .map(|(date, [count_2324, count_2425])| MergedDayRow {
            date,
            count_2324,
            count_2425,
        })
        .collect();

    info!(
        days = rows.len(),
        outside_academic_years = outside,
        "Merged daily counts by academic year"
    );
    MergedByDay {
        rows,
        outside_academic_years: outside,
    }
}
