//! Statistics Computation
//!
//! Parallel reduction of parsed raw lines into summary rows. Runs only
//! after measurement has finished; a timed region is never concurrent
//! with anything.

use rayon::prelude::*;
use shiftbench_report::{RawTrialLine, SizeSummary};
use shiftbench_stats::StatsError;

/// Reduce raw lines to summary rows, one per input size, preserving the
/// input order. The first statistics error aborts the reduction.
pub fn summarize_lines(lines: &[RawTrialLine]) -> Result<Vec<SizeSummary>, StatsError> {
    lines
        .par_iter()
        .map(|line| SizeSummary::from_series(line.size, &line.counts, &line.times))
        .collect()
}
