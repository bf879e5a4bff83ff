//! Input and output locations for a pipeline run.
//!
//! File names are fixed; only the two directories can be moved.

use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "mailroomData";
pub const DEFAULT_CLEAN_DIR: &str = "cleanData";

pub const INPUT_2324: &str = "packages_2324.csv";
pub const INPUT_2425: &str = "packages_2425.csv";

pub const MERGED_BY_DAY: &str = "merged_by_day.csv";
pub const MERGED_BY_DAY_CARRIER: &str = "merged_by_day_carrier.csv";

/// Which input export a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceYear {
    Y2324,
    Y2425,
}

impl SourceYear {
    pub const ALL: [SourceYear; 2] = [SourceYear::Y2324, SourceYear::Y2425];

    /// Suffix used in file names, e.g. `2324`.
    pub fn suffix(self) -> &'static str {
        match self {
            SourceYear::Y2324 => "2324",
            SourceYear::Y2425 => "2425",
        }
    }

    /// Human label used in the console report.
    pub fn label(self) -> &'static str {
        match self {
            SourceYear::Y2324 => "2023-24",
            SourceYear::Y2425 => "2024-25",
        }
    }
}

/// Resolved paths for one run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Holds the two package exports and receives the per-year count tables.
    pub data_dir: PathBuf,
    /// Receives the two merged day-indexed tables.
    pub clean_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR, DEFAULT_CLEAN_DIR)
    }
}

impl PipelineConfig {
    pub fn new(data_dir: impl Into<PathBuf>, clean_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            clean_dir: clean_dir.into(),
        }
    }

    pub fn input_path(&self, year: SourceYear) -> PathBuf {
        let name = match year {
            SourceYear::Y2324 => INPUT_2324,
            SourceYear::Y2425 => INPUT_2425,
        };
        self.data_dir.join(name)
    }

    /// Path of a per-year count table, e.g. `weekly_counts_2425.csv`.
    pub fn count_table_path(&self, prefix: &str, year: SourceYear) -> PathBuf {
        self.data_dir
            .join(format!("{}_counts_{}.csv", prefix, year.suffix()))
    }

    pub fn merged_by_day_path(&self) -> PathBuf {
        self.clean_dir.join(MERGED_BY_DAY)
    }

    pub fn merged_by_day_carrier_path(&self) -> PathBuf {
        self.clean_dir.join(MERGED_BY_DAY_CARRIER)
    }

    pub fn output_dirs(&self) -> [&Path; 2] {
        [self.data_dir.as_path(), self.clean_dir.as_path()]
    }
}
