use std::collections::BTreeMap;
use std::fmt::Display;

use chrono::NaiveDate;

use crate::cleaner::{MonthPeriod, PackageRecord, WeekPeriod};
use crate::config::SourceYear;

/// Time-bucket size of a count table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Month,
    Week,
    Day,
}

impl Granularity {
    /// Header of the key column in exported files.
    pub fn key_column(self) -> &'static str {
        match self {
            Granularity::Month => "YearMonth",
            Granularity::Week => "YearWeek",
            Granularity::Day => "Date",
        }
    }

    /// File-name prefix, as in `weekly_counts_2324.csv`.
    pub fn file_prefix(self) -> &'static str {
        match self {
            Granularity::Month => "monthly",
            Granularity::Week => "weekly",
            Granularity::Day => "daily",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Granularity::Month => "Monthly",
            Granularity::Week => "Weekly",
            Granularity::Day => "Daily",
        }
    }
}

/// Package counts per period key, ascending by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountTable<K> {
    pub granularity: Granularity,
    counts: BTreeMap<K, u64>,
}

impl<K: Ord + Copy + Display> CountTable<K> {
    /// Groups `records` by `key_fn` and counts each group.
    pub fn count_by(
        granularity: Granularity,
        records: &[PackageRecord],
        key_fn: impl Fn(&PackageRecord) -> K,
    ) -> Self {
        // BTreeMap keeps keys sorted.
        let mut counts: BTreeMap<K, u64> = BTreeMap::new();
        for record in records {
            *counts.entry(key_fn(record)).or_insert(0) += 1;
        }
        Self {
            granularity,
            counts,
        }
    }

    /// Sum of every count in the table.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, u64)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }

    /// Rows as `(rendered key, count)`, used by the reporter and exporter.
    pub fn rows(&self) -> Vec<(String, u64)> {
        self.iter().map(|(k, v)| (k.to_string(), v)).collect()
    }
}

/// The three count tables for one input year.
#[derive(Debug, Clone)]
pub struct YearTables {
    pub year: SourceYear,
    pub monthly: CountTable<MonthPeriod>,
    pub weekly: CountTable<WeekPeriod>,
    pub daily: CountTable<NaiveDate>,
}

impl YearTables {
    pub fn from_records(year: SourceYear, records: &[PackageRecord]) -> Self {
        Self {
            year,
            monthly: CountTable::count_by(Granularity::Month, records, |r| r.month),
            weekly: CountTable::count_by(Granularity::Week, records, |r| r.week),
            daily: CountTable::count_by(Granularity::Day, records, |r| r.date),
        }
    }

    /// Grand total from the monthly table.
    pub fn total(&self) -> u64 {
        self.monthly.total()
    }

    /// `(granularity, rendered rows)` in month, week, day order.
    pub fn tables(&self) -> [(Granularity, Vec<(String, u64)>); 3] {
        [
            (Granularity::Month, self.monthly.rows()),
            (Granularity::Week, self.weekly.rows()),
            (Granularity::Day, self.daily.rows()),
        ]
    }
}
