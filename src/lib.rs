// Sorting Algorithm Benchmark Library

/// The single capability all algorithm variants implement.
///
/// Sorts the slice in place in ascending order. The harness hands each
/// call a fresh copy of the dataset, so implementations are free to
/// reorder the slice however they like.
pub trait Sorter {
    fn sort(&self, data: &mut [i64]);
}

// Implementations
pub mod bench;
pub mod dataset;
pub mod error;
pub mod rand;
pub mod sort;

// Export the main types
pub use bench::reporting::{render_results, report};
pub use bench::runner::BenchmarkRunner;
pub use bench::types::{ResultsRecord, SortJob};
pub use bench::verification::is_sorted;
pub use dataset::Dataset;
pub use error::BenchError;
pub use sort::Algorithm;
