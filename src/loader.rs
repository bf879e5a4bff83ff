//! Reads the two package-log exports into raw record sets.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::{PipelineConfig, SourceYear};
use crate::error::{PipelineError, Result};

pub const RECEIVED_COLUMN: &str = "Received";
pub const CARRIER_COLUMN: &str = "Carrier";

/// One row of a package-log export. Other columns are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Received")]
    pub received: Option<String>,
    #[serde(rename = "Carrier")]
    pub carrier: Option<String>,
}

/// Raw rows from one export plus the number of rows that could not be decoded.
#[derive(Debug, Default)]
pub struct LoadedFile {
    pub records: Vec<RawRecord>,
    pub undecodable: usize,
}

/// Fails with [`PipelineError::MissingInput`] unless both exports exist.
///
/// Runs before anything is read or written.
pub fn check_inputs(config: &PipelineConfig) -> Result<()> {
    let missing: Vec<PathBuf> = SourceYear::ALL
        .iter()
        .map(|year| config.input_path(*year))
        .filter(|path| !path.is_file())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PipelineError::MissingInput { paths: missing })
    }
}

/// Reads a comma-separated export with a header row.
///
/// Rows whose fields are not valid text are skipped and counted; I/O
/// failures and missing required headers are fatal.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_records(path: &Path) -> Result<LoadedFile> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| PipelineError::csv(path, e))?;

    let headers = rdr
        .headers()
        .map_err(|e| PipelineError::csv(path, e))?
        .clone();
    for column in [RECEIVED_COLUMN, CARRIER_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(PipelineError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut loaded = LoadedFile::default();
    for result in rdr.deserialize::<RawRecord>() {
        match result {
            Ok(record) => loaded.records.push(record),
            Err(e) if e.is_io_error() => return Err(PipelineError::csv(path, e)),
            Err(e) => {
                debug!(error = %e, "Skipping undecodable row");
                loaded.undecodable += 1;
            }
        }
    }

    info!(
        rows = loaded.records.len(),
        undecodable = loaded.undecodable,
        "Loaded package export"
    );
    Ok(loaded)
}
