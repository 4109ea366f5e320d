//! Instrumented Insertion Sort
//!
//! Iterative and recursive variants of classic insertion sort over a
//! mutable integer slice. Both count element shifts (the critical
//! operation: moving one element a single position leftward while
//! searching for the insertion point) and measure wall-clock nanoseconds
//! around the sort itself. Verification runs after the timed region; an
//! out-of-order result is a fatal `UnsortedError`, never a silent
//! continuation.
//!
//! The two variants implement the same algorithm, so for any input they
//! produce identical orderings and identical shift counts. The benchmark
//! compares call-strategy overhead only.

use crate::measure::Timer;
use crate::verify::is_sorted;
use thiserror::Error;

/// Which sort implementation produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortVariant {
    /// Loop-based insertion sort
    Iterative,
    /// Function-recursion insertion sort (recursion depth equals input length)
    Recursive,
}

impl SortVariant {
    /// Lowercase label, used for file names and log fields
    pub fn label(self) -> &'static str {
        match self {
            SortVariant::Iterative => "iterative",
            SortVariant::Recursive => "recursive",
        }
    }
}

impl std::fmt::Display for SortVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A sort call finished with its output out of order.
///
/// This signals a defect in the algorithm implementation itself; the
/// benchmark run must abort rather than aggregate corrupted data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{variant} insertion sort produced an unsorted result (len {len})")]
pub struct UnsortedError {
    /// Variant that produced the bad output
    pub variant: SortVariant,
    /// Length of the offending sequence
    pub len: usize,
}

/// Measurements from a single instrumented sort call.
///
/// Produced exactly once per invocation, immutable thereafter; no state
/// leaks across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    /// Number of single-position element shifts performed
    pub shift_count: u64,
    /// Wall-clock duration of the sort itself, in nanoseconds
    pub elapsed_ns: u64,
}

/// Worst-case shift count for a sequence of length `n`: `n * (n - 1) / 2`,
/// reached on fully reversed input.
pub fn max_shift_count(n: usize) -> u64 {
    let n = n as u64;
    n * n.saturating_sub(1) / 2
}

/// Sort `data` in place with iterative insertion sort.
///
/// Returns the shift count and elapsed nanoseconds. Equal elements never
/// shift (strict greater-than comparison), so duplicates cost nothing.
pub fn sort_iterative(data: &mut [u32]) -> Result<RunResult, UnsortedError> {
    let timer = Timer::start();
    let mut shifts: u64 = 0;

    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            // critical operation: one element shift
            data[j] = data[j - 1];
            j -= 1;
            shifts += 1;
        }
        data[j] = key;
    }

    let elapsed_ns = timer.stop();
    check_sorted(data, SortVariant::Iterative)?;
    Ok(RunResult {
        shift_count: shifts,
        elapsed_ns,
    })
}

/// Sort `data` in place with recursive insertion sort.
///
/// Recurses to sort the first `n - 1` elements before inserting the
/// `n`-th, so the ordering and shift count are identical to
/// [`sort_iterative`] for the same input. Recursion depth equals the
/// input length; very large inputs are bounded by thread stack size.
pub fn sort_recursive(data: &mut [u32]) -> Result<RunResult, UnsortedError> {
    let timer = Timer::start();
    let mut shifts: u64 = 0;

    let n = data.len();
    insert_recursive(data, n, &mut shifts);

    let elapsed_ns = timer.stop();
    check_sorted(data, SortVariant::Recursive)?;
    Ok(RunResult {
        shift_count: shifts,
        elapsed_ns,
    })
}

/// Sorts the first `n` elements of `data`.
fn insert_recursive(data: &mut [u32], n: usize, shifts: &mut u64) {
    if n <= 1 {
        return;
    }
    insert_recursive(data, n - 1, shifts);

    // Insert element n-1 into the sorted prefix
    let key = data[n - 1];
    let mut j = n - 1;
    while j > 0 && data[j - 1] > key {
        data[j] = data[j - 1];
        j -= 1;
        *shifts += 1;
    }
    data[j] = key;
}

fn check_sorted(data: &[u32], variant: SortVariant) -> Result<(), UnsortedError> {
    if is_sorted(data) {
        Ok(())
    } else {
        Err(UnsortedError {
            variant,
            len: data.len(),
        })
    }
}
