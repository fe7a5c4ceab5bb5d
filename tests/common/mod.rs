// Not every test binary uses every helper.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Write a dataset file with one line per entry.
pub fn write_dataset(path: &Path, lines: &[&str]) {
    let mut contents = lines.join("\n");
    if !lines.is_empty() {
        contents.push('\n');
    }
    fs::write(path, contents).expect("Failed to write dataset file");
}

/// The expected output for an input: the same multiset in ascending order.
pub fn sorted_oracle(values: &[i64]) -> Vec<i64> {
    let mut expected = values.to_vec();
    expected.sort_unstable();
    expected
}
