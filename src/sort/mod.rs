//! Sorting algorithm variants and the registry that selects between them.

pub mod bubble;
pub mod counting;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;

pub use bubble::BubbleSort;
pub use counting::CountingSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use radix::RadixSort;
pub use selection::SelectionSort;

use clap::ValueEnum;

use crate::Sorter;

/// The closed set of supported algorithm identifiers.
///
/// The set is fixed at build time; there is no dynamic registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Counting,
    Radix,
}

impl Algorithm {
    /// Get all algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![
            Algorithm::Bubble,
            Algorithm::Insertion,
            Algorithm::Selection,
            Algorithm::Merge,
            Algorithm::Quick,
            Algorithm::Counting,
            Algorithm::Radix,
        ]
    }

    /// Human-readable name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Counting => "Counting Sort",
            Algorithm::Radix => "Radix Sort",
        }
    }

    /// The sorter implementing this variant
    pub fn sorter(&self) -> &'static dyn Sorter {
        match self {
            Algorithm::Bubble => &BubbleSort,
            Algorithm::Insertion => &InsertionSort,
            Algorithm::Selection => &SelectionSort,
            Algorithm::Merge => &MergeSort,
            Algorithm::Quick => &QuickSort,
            Algorithm::Counting => &CountingSort,
            Algorithm::Radix => &RadixSort,
        }
    }
}
