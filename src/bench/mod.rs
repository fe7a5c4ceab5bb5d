pub mod reporting;
pub mod runner;
pub mod types;
pub mod verification;

pub use reporting::{render_results, report};
pub use runner::BenchmarkRunner;
pub use types::{ResultsRecord, SortJob};
pub use verification::is_sorted;
