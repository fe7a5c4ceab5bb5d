use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::BenchError;

/// The in-memory integer sequence under test.
///
/// Loaded once per invocation from a newline-delimited text file, in file
/// line order, and never mutated afterwards. Each benchmark run sorts a
/// fresh copy obtained from [`Dataset::to_vec`], so the loaded values stay
/// pristine for repeat runs.
#[derive(Debug, Clone)]
pub struct Dataset {
    values: Vec<i64>,
}

impl Dataset {
    /// Read a dataset file, one base-10 signed integer per line.
    ///
    /// Lines that do not parse after trimming are skipped silently; this
    /// lenient policy is intentional and keeps `Data size` equal to the
    /// count of parseable lines. A missing file is fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BenchError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BenchError::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|source| BenchError::DatasetRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut values = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| BenchError::DatasetRead {
                path: path.to_path_buf(),
                source,
            })?;
            if let Ok(value) = line.trim().parse::<i64>() {
                values.push(value);
            }
        }

        Ok(Self { values })
    }

    /// Build a dataset directly from values (tests and library callers).
    pub fn from_values(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// A fresh duplicate for one sort run.
    pub fn to_vec(&self) -> Vec<i64> {
        self.values.clone()
    }
}
