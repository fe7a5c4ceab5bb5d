use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that terminate a benchmark run.
///
/// Malformed individual dataset lines are deliberately not represented
/// here: the loader skips them. Only a missing or unreadable file, or an
/// unwritable results path, ends the run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The input dataset file does not exist. No sort is attempted.
    #[error("dataset not found: {}", path.display())]
    DatasetNotFound { path: PathBuf },

    /// The dataset file exists but reading it failed mid-stream.
    #[error("failed to read dataset {}: {source}", path.display())]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The results file could not be written. The sort itself completed
    /// and was verified; the record is lost. Not retried.
    #[error("failed to write results to {}: {source}", path.display())]
    ResultsWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
