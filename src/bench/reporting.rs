use std::fs;
use std::path::Path;

use chrono::Local;

use crate::error::BenchError;

use super::types::ResultsRecord;

/// Implementation tag in the results header, matching the naming the other
/// language ports use for their results files.
const IMPLEMENTATION: &str = "Rust";

/// Render the fixed results block.
///
/// One fact per line, execution time to 6 decimal places, throughput as a
/// rounded integer. The format is byte-for-byte reproducible so records
/// can be compared across implementations.
pub fn render_results(record: &ResultsRecord) -> String {
    format!(
        "{} {} Results\n\
         Data size: {}\n\
         Execution time: {:.6} seconds\n\
         Elements per second: {}\n\
         Sorted correctly: {}\n",
        IMPLEMENTATION,
        record.algorithm,
        record.data_size,
        record.execution_secs,
        record.elements_per_second,
        record.sorted_correctly,
    )
}

/// Echo a human-readable summary to the console and write the results
/// block to `path`, overwriting any existing file.
///
/// A write failure is fatal and not retried; the record is lost but the
/// error is always surfaced to the caller.
pub fn report(record: &ResultsRecord, path: &Path) -> Result<(), BenchError> {
    println!(
        "Sorting completed: {}",
        if record.sorted_correctly {
            "SUCCESS"
        } else {
            "FAILED"
        }
    );
    println!("Execution time: {:.6} seconds", record.execution_secs);
    println!("Elements per second: {}", record.elements_per_second);
    println!("Run date: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

    fs::write(path, render_results(record)).map_err(|source| BenchError::ResultsWrite {
        path: path.to_path_buf(),
        source,
    })?;

    println!("Results saved to {}", path.display());
    Ok(())
}
