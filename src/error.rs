//! Error types for the mailroom pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a pipeline run.
///
/// Row-level problems (bad timestamps, early dates, unknown carriers) never
/// show up here; the cleaner filters those out silently.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// One or both package exports are absent.
    #[error("Missing input file(s): {}", display_paths(.paths))]
    MissingInput { paths: Vec<PathBuf> },

    /// An input file has no header for a required column.
    #[error("Input file {path} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The console report could not be written.
    #[error("Failed to write console report: {0}")]
    Report(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

impl PipelineError {
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
