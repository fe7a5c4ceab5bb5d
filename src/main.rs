use std::path::PathBuf;
use std::process;

use clap::Parser;

use sortbench::{Algorithm, BenchError, BenchmarkRunner};

#[derive(Parser)]
#[command(name = "sortbench")]
#[command(about = "Benchmark one sorting algorithm over an integer dataset", long_about = None)]
struct Cli {
    /// Sorting algorithm to benchmark
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Input dataset file, one integer per line
    #[arg(default_value = "random_list.txt")]
    input: PathBuf,

    /// Results output file
    #[arg(default_value = "results_rust.txt")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    println!("Rust {} Performance Test", cli.algorithm.name());
    println!("================================");
    println!("Using dataset: {}", cli.input.display());

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), BenchError> {
    println!("Reading data from file...");
    let job = BenchmarkRunner::prepare(cli.algorithm, &cli.input, &cli.output)?;
    println!("Data size: {} integers", job.dataset.len());

    println!("Starting {}...", cli.algorithm.name());
    BenchmarkRunner::run(job)?;

    Ok(())
}
