use crate::Sorter;

/// Bubble sort: adjacent-swap passes with an early exit once a full pass
/// produces no swaps, so already-sorted input costs a single pass.
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn sort(&self, data: &mut [i64]) {
        let n = data.len();
        for pass in 0..n {
            let mut swapped = false;
            for i in 1..n - pass {
                if data[i - 1] > data[i] {
                    data.swap(i - 1, i);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
    }
}
