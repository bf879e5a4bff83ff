//! Classification types and wide output rows.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// July-to-June operational year, assigned from a record's date alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AcademicYear {
    Y2023_24,
    Y2024_25,
}

impl AcademicYear {
    pub const ALL: [AcademicYear; 2] = [AcademicYear::Y2023_24, AcademicYear::Y2024_25];

    /// Returns `None` for dates outside 2023-07-01..=2025-06-30.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        Self::ALL.into_iter().find(|year| {
            let (first, last) = year.bounds();
            first <= date && date <= last
        })
    }

    /// Inclusive first and last day of the year.
    pub fn bounds(self) -> (NaiveDate, NaiveDate) {
        let start_year = match self {
            AcademicYear::Y2023_24 => 2023,
            AcademicYear::Y2024_25 => 2024,
        };
        (ymd(start_year, 7, 1), ymd(start_year + 1, 6, 30))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Name of this year's column in `merged_by_day.csv`.
    pub fn column(self) -> &'static str {
        match self {
            AcademicYear::Y2023_24 => "count_2324",
            AcademicYear::Y2024_25 => "count_2425",
        }
    }
}

/// Normalized shipping carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CarrierCategory {
    Usps,
    Ups,
    Fedex,
    Amazon,
    Other,
}

impl CarrierCategory {
    /// Output column order.
    pub const ALL: [CarrierCategory; 5] = [
        CarrierCategory::Usps,
        CarrierCategory::Ups,
        CarrierCategory::Fedex,
        CarrierCategory::Amazon,
        CarrierCategory::Other,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CarrierCategory::Usps => "USPS",
            CarrierCategory::Ups => "UPS",
            CarrierCategory::Fedex => "FEDEX",
            CarrierCategory::Amazon => "AMAZON",
            CarrierCategory::Other => "OTHER",
        }
    }
}

impl fmt::Display for CarrierCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of `merged_by_day.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedDayRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    pub count_2324: u64,
    pub count_2425: u64,
}

impl MergedDayRow {
    pub fn total(&self) -> u64 {
        self.count_2324 + self.count_2425
    }
}

/// One row of `merged_by_day_carrier.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarrierDayRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "USPS")]
    pub usps: u64,
    #[serde(rename = "UPS")]
    pub ups: u64,
    #[serde(rename = "FEDEX")]
    pub fedex: u64,
    #[serde(rename = "AMAZON")]
    pub amazon: u64,
    #[serde(rename = "OTHER")]
    pub other: u64,
    #[serde(rename = "Total")]
    pub total: u64,
}

impl CarrierDayRow {
    /// Builds a row from counts in [`CarrierCategory::ALL`] order; `Total` is their sum.
    pub fn from_counts(date: NaiveDate, counts: [u64; 5]) -> Self {
        let [usps, ups, fedex, amazon, other] = counts;
        Self {
            date,
            usps,
            ups,
            fedex,
            amazon,
            other,
            total: counts.iter().sum(),
        }
    }

    pub fn count(&self, category: CarrierCategory) -> u64 {
        match category {
            CarrierCategory::Usps => self.usps,
            CarrierCategory::Ups => self.ups,
            CarrierCategory::Fedex => self.fedex,
            CarrierCategory::Amazon => self.amazon,
            CarrierCategory::Other => self.other,
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_academic_year_boundaries() {
        assert_eq!(AcademicYear::from_date(ymd(2023, 6, 30)), None);
        assert_eq!(
            AcademicYear::from_date(ymd(2023, 7, 1)),
            Some(AcademicYear::Y2023_24)
        );
        assert_eq!(
            AcademicYear::from_date(ymd(2024, 6, 30)),
            Some(AcademicYear::Y2023_24)
        );
        assert_eq!(
            AcademicYear::from_date(ymd(2024, 7, 1)),
            Some(AcademicYear::Y2024_25)
        );
        assert_eq!(
            AcademicYear::from_date(ymd(2025, 6, 30)),
            Some(AcademicYear::Y2024_25)
        );
        assert_eq!(AcademicYear::from_date(ymd(2025, 7, 1)), None);
    }

    #[test]
    fn test_academic_year_columns() {
        assert_eq!(AcademicYear::Y2023_24.column(), "count_2324");
        assert_eq!(AcademicYear::Y2024_25.column(), "count_2425");
    }

    #[test]
    fn test_carrier_indices_follow_column_order() {
        for (i, category) in CarrierCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_carrier_row_total() {
        let row = CarrierDayRow::from_counts(ymd(2023, 7, 3), [1, 2, 3, 4, 5]);
        assert_eq!(row.total, 15);
        assert_eq!(row.count(CarrierCategory::Amazon), 4);
        assert_eq!(row.count(CarrierCategory::Other), 5);
    }
}
