//! Trial Execution
//!
//! Runs the configured number of trials for each input size across both
//! sort variants. The trial loop is single-threaded and synchronous:
//! nothing runs concurrently with a timed sort. Each trial owns its
//! dataset exclusively; a verification failure aborts the remaining
//! trials for the size instead of masking a correctness bug with partial
//! results.

use crate::dataset::generate_dataset;
use rand::Rng;
use shiftbench_core::{sort_iterative, sort_recursive, RunResult, SortVariant, UnsortedError};
use thiserror::Error;

/// Errors from the trial loop and trial-set handling
#[derive(Debug, Error)]
pub enum RunnerError {
    /// A sort call produced out-of-order output; fatal to the run
    #[error(transparent)]
    Unsorted(#[from] UnsortedError),

    /// Aggregation was attempted on a partial or oversized trial set
    #[error("trial set for size {size} ({variant}) holds {got} results, expected {expected}")]
    IncompleteTrialSet {
        /// Input size of the offending set
        size: usize,
        /// Variant of the offending set
        variant: SortVariant,
        /// Configured trial count
        expected: usize,
        /// Results actually present
        got: usize,
    },
}

/// All results for one (size, variant) pair, in trial order.
#[derive(Debug, Clone)]
pub struct TrialSet {
    size: usize,
    variant: SortVariant,
    results: Vec<RunResult>,
}

impl TrialSet {
    fn new(size: usize, variant: SortVariant, capacity: usize) -> Self {
        Self {
            size,
            variant,
            results: Vec::with_capacity(capacity),
        }
    }

    /// Input size this set belongs to
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sort variant this set belongs to
    pub fn variant(&self) -> SortVariant {
        self.variant
    }

    /// Collected results in trial order
    pub fn results(&self) -> &[RunResult] {
        &self.results
    }

    /// Split into count and time series, validating completeness first.
    ///
    /// Aggregating a partial set is a hard error, not a NaN.
    pub fn series(&self, expected: usize) -> Result<(Vec<f64>, Vec<f64>), RunnerError> {
        if self.results.len() != expected {
            return Err(RunnerError::IncompleteTrialSet {
                size: self.size,
                variant: self.variant,
                expected,
                got: self.results.len(),
            });
        }
        let counts = self.results.iter().map(|r| r.shift_count as f64).collect();
        let times = self.results.iter().map(|r| r.elapsed_ns as f64).collect();
        Ok((counts, times))
    }
}

/// Both variants' trial sets for one input size
#[derive(Debug, Clone)]
pub struct SizeTrials {
    /// Results of the iterative variant
    pub iterative: TrialSet,
    /// Results of the recursive variant
    pub recursive: TrialSet,
}

/// Runs all trials for one input size at a time.
pub struct TrialRunner<R: Rng> {
    rng: R,
    trials: usize,
}

impl<R: Rng> TrialRunner<R> {
    /// A runner drawing datasets from `rng`, `trials` per size and variant.
    pub fn new(rng: R, trials: usize) -> Self {
        Self { rng, trials }
    }

    /// Run every trial for `size`.
    ///
    /// Each trial generates one fresh dataset and hands an
    /// element-for-element copy to each variant, so both sort the same
    /// multiset. The first verification failure propagates immediately.
    pub fn run_size(&mut self, size: usize) -> Result<SizeTrials, RunnerError> {
        let mut iterative = TrialSet::new(size, SortVariant::Iterative, self.trials);
        let mut recursive = TrialSet::new(size, SortVariant::Recursive, self.trials);

        for _ in 0..self.trials {
            let mut iterative_data = generate_dataset(&mut self.rng, size);
            let mut recursive_data = iterative_data.clone();

            iterative.results.push(sort_iterative(&mut iterative_data)?);
            recursive.results.push(sort_recursive(&mut recursive_data)?);
        }

        Ok(SizeTrials {
            iterative,
            recursive,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_run_size_collects_full_trial_sets() {
        let mut runner = TrialRunner::new(ChaCha8Rng::seed_from_u64(1), 5);
        let trials = runner.run_size(32).unwrap();

        assert_eq!(trials.iterative.results().len(), 5);
        assert_eq!(trials.recursive.results().len(), 5);
        assert_eq!(trials.iterative.size(), 32);
        assert_eq!(trials.recursive.variant(), SortVariant::Recursive);
    }

    #[test]
    fn test_variants_count_identically_per_trial() {
        let mut runner = TrialRunner::new(ChaCha8Rng::seed_from_u64(2), 8);
        let trials = runner.run_size(64).unwrap();

        for (iter, rec) in trials
            .iterative
            .results()
            .iter()
            .zip(trials.recursive.results())
        {
            assert_eq!(iter.shift_count, rec.shift_count);
        }
    }

    #[test]
    fn test_series_validates_completeness() {
        let mut runner = TrialRunner::new(ChaCha8Rng::seed_from_u64(3), 4);
        let trials = runner.run_size(16).unwrap();

        let (counts, times) = trials.iterative.series(4).unwrap();
        assert_eq!(counts.len(), 4);
        assert_eq!(times.len(), 4);

        let err = trials.iterative.series(50).unwrap_err();
        assert!(matches!(
            err,
            RunnerError::IncompleteTrialSet {
                size: 16,
                expected: 50,
                got: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_zero_size_trials_count_zero() {
        let mut runner = TrialRunner::new(ChaCha8Rng::seed_from_u64(4), 3);
        let trials = runner.run_size(0).unwrap();
        assert!(trials
            .iterative
            .results()
            .iter()
            .all(|r| r.shift_count == 0));
    }
}
