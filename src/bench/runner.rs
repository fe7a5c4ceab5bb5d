use std::path::Path;
use std::time::Instant;

use crate::dataset::Dataset;
use crate::error::BenchError;
use crate::sort::Algorithm;

use super::reporting;
use super::types::{ResultsRecord, SortJob};
use super::verification::is_sorted;

/// Drives one benchmark invocation through its phases in strict sequence:
/// load, clone, time the sort, verify, report. Single-threaded; nothing is
/// shared across invocations because each run owns its own dataset copy.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Loading phase: read the dataset and bind it into a job.
    ///
    /// A missing input file fails here, before any sort is attempted.
    pub fn prepare(
        algorithm: Algorithm,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<SortJob, BenchError> {
        let dataset = Dataset::load(input_path)?;
        Ok(SortJob {
            algorithm,
            dataset,
            output_path: output_path.to_path_buf(),
        })
    }

    /// Run a prepared job to completion and write its results record.
    ///
    /// The clock spans exactly the sorter invocation: the dataset copy is
    /// made before the clock starts and verification runs after it stops.
    /// Scratch allocation done by the algorithm itself (counting/radix
    /// tables) counts as part of the algorithm's cost. Verification only
    /// ever touches the sorted copy.
    pub fn run(job: SortJob) -> Result<ResultsRecord, BenchError> {
        let mut working = job.dataset.to_vec();
        let sorter = job.algorithm.sorter();

        let start = Instant::now();
        sorter.sort(&mut working);
        let execution_secs = start.elapsed().as_secs_f64();

        let sorted_correctly = is_sorted(&working);

        let record = ResultsRecord::new(
            job.algorithm.name(),
            job.dataset.len(),
            execution_secs,
            sorted_correctly,
        );
        reporting::report(&record, &job.output_path)?;

        Ok(record)
    }
}
