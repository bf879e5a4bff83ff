use serde::Serialize;

/// Row tallies from cleaning one export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanStats {
    pub total_rows: usize,
    pub unparseable: usize,
    pub before_cutoff: usize,
    pub kept: usize,
}

/// Totals for a single input year.
#[derive(Debug, Clone, Default, Serialize)]
pub struct YearSummary {
    pub year: String,
    pub undecodable_rows: usize,
    pub cleaning: CleanStats,
    pub total_packages: u64,
    pub months: usize,
    pub weeks: usize,
    pub days: usize,
}

/// End-of-run summary logged as JSON.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub years: Vec<YearSummary>,
    pub merged_days: usize,
    pub outside_academic_years: usize,
    pub carrier_days: usize,
    pub other_carrier_packages: u64,
    pub files_written: Vec<String>,
}

impl RunSummary {
    /// Packages that made it through cleaning across both exports.
    pub fn total_packages(&self) -> u64 {
        self.years.iter().map(|y| y.total_packages).sum()
    }

    pub fn record_file(&mut self, path: &std::path::Path) {
        self.files_written.push(path.display().to_string());
    }
}
