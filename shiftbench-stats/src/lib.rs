#![warn(missing_docs)]
//! Shiftbench Statistical Engine
//!
//! Statistical reduction for repeated benchmark trials:
//! - arithmetic mean
//! - sample standard deviation with Bessel's correction
//! - coefficient of variation as a percentage
//!
//! Degenerate inputs are typed errors, never silent NaN or zero: fewer
//! than two samples is `InsufficientSamples`, a zero-mean series is
//! `DegenerateDistribution`.

mod summary;

pub use summary::{
    coefficient_of_variation, compute_series, mean, std_dev, SeriesStatistics, StatsError,
};

/// Minimum samples required for a sample standard deviation
pub const MIN_SAMPLES: usize = 2;
