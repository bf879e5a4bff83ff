//! Timestamp cleaning and period-key derivation.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use tracing::info;

use crate::config::SourceYear;
use crate::loader::RawRecord;
use crate::parser::{cutoff, parse_received};
use crate::stats::CleanStats;

/// Calendar month bucket, rendered as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthPeriod {
    pub year: i32,
    pub month: u32,
}

impl MonthPeriod {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Monday-to-Sunday week bucket, rendered as `start/end`
/// (e.g. `2023-07-03/2023-07-09`). Orders by its Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekPeriod {
    pub start: NaiveDate,
}

impl WeekPeriod {
    pub fn of(date: NaiveDate) -> Self {
        let offset = u64::from(date.weekday().num_days_from_monday());
        Self {
            start: date - Days::new(offset),
        }
    }

    /// The Sunday closing this week.
    pub fn end(&self) -> NaiveDate {
        self.start + Days::new(6)
    }
}

impl fmt::Display for WeekPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.start.format("%Y-%m-%d"),
            self.end().format("%Y-%m-%d")
        )
    }
}

/// A package row that survived cleaning, with its derived period keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub received: NaiveDateTime,
    pub carrier: Option<String>,
    pub source: SourceYear,
    pub date: NaiveDate,
    pub week: WeekPeriod,
    pub month: MonthPeriod,
}

impl PackageRecord {
    pub fn new(received: NaiveDateTime, carrier: Option<String>, source: SourceYear) -> Self {
        let date = received.date();
        Self {
            received,
            carrier,
            source,
            date,
            week: WeekPeriod::of(date),
            month: MonthPeriod::of(date),
        }
    }
}

/// Parses timestamps and drops unparseable or pre-cutoff rows.
///
/// Never fails: bad rows are tallied in the returned [`CleanStats`].
#[tracing::instrument(skip(raw), fields(source = source.suffix(), rows = raw.len()))]
pub fn clean(raw: Vec<RawRecord>, source: SourceYear) -> (Vec<PackageRecord>, CleanStats) {
    let cutoff = cutoff();
    let mut stats = CleanStats {
        total_rows: raw.len(),
        ..Default::default()
    };

    let mut records = Vec::with_capacity(raw.len());
    for row in raw {
        let Some(received) = row.received.as_deref().and_then(parse_received) else {
            stats.unparseable += 1;
            continue;
        };
        if received < cutoff {
            stats.before_cutoff += 1;
            continue;
        }
        records.push(PackageRecord::new(received, row.carrier, source));
    }
    stats.kept = records.len();

    info!(
        kept = stats.kept,
        unparseable = stats.unparseable,
        before_cutoff = stats.before_cutoff,
        "Cleaned package records"
    );
    (records, stats)
}
