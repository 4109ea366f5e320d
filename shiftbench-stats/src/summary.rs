//! Series Statistics
//!
//! Two-pass computation: mean first, then squared deviations. The variance
//! divisor is `len - 1` (Bessel's correction), matching what a sample of
//! repeated trials estimates.

use crate::MIN_SAMPLES;
use thiserror::Error;

/// Errors from statistical reduction of a trial series
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatsError {
    /// Aggregation needs at least [`MIN_SAMPLES`] results
    #[error("need at least 2 samples for aggregation, got {got}")]
    InsufficientSamples {
        /// Number of samples actually provided
        got: usize,
    },

    /// Coefficient of variation divides by the mean; a zero-mean series
    /// has no defined relative dispersion
    #[error("coefficient of variation is undefined for a zero-mean series")]
    DegenerateDistribution,
}

/// Reduced statistics for one series of trial values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (Bessel-corrected)
    pub std_dev: f64,
    /// Coefficient of variation, as a percentage
    pub coeff_var_pct: f64,
    /// Number of samples reduced
    pub sample_count: usize,
}

/// Arithmetic mean of `samples`. Errors on an empty series.
pub fn mean(samples: &[f64]) -> Result<f64, StatsError> {
    if samples.is_empty() {
        return Err(StatsError::InsufficientSamples { got: 0 });
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Sample standard deviation of `samples`, with Bessel's correction.
///
/// Requires at least [`MIN_SAMPLES`] values; the `len - 1` divisor is not
/// defined below that.
pub fn std_dev(samples: &[f64]) -> Result<f64, StatsError> {
    if samples.len() < MIN_SAMPLES {
        return Err(StatsError::InsufficientSamples {
            got: samples.len(),
        });
    }
    let m = samples.iter().sum::<f64>() / samples.len() as f64;
    let variance =
        samples.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
    Ok(variance.sqrt())
}

/// Coefficient of variation of `samples`, as a percentage.
///
/// `std_dev / mean * 100`; a zero mean is a `DegenerateDistribution`
/// error rather than an infinite or NaN result.
pub fn coefficient_of_variation(samples: &[f64]) -> Result<f64, StatsError> {
    let sd = std_dev(samples)?;
    let m = mean(samples)?;
    if m == 0.0 {
        return Err(StatsError::DegenerateDistribution);
    }
    Ok(sd / m * 100.0)
}

/// Reduce one trial series to [`SeriesStatistics`].
pub fn compute_series(samples: &[f64]) -> Result<SeriesStatistics, StatsError> {
    let sd = std_dev(samples)?;
    let m = mean(samples)?;
    if m == 0.0 {
        return Err(StatsError::DegenerateDistribution);
    }
    Ok(SeriesStatistics {
        mean: m,
        std_dev: sd,
        coeff_var_pct: sd / m * 100.0,
        sample_count: samples.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_small_series() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
    }

    #[test]
    fn test_mean_of_empty_series_fails() {
        assert_eq!(
            mean(&[]),
            Err(StatsError::InsufficientSamples { got: 0 })
        );
    }

    #[test]
    fn test_constant_series_has_zero_cv() {
        let cv = coefficient_of_variation(&[5.0, 5.0, 5.0]).unwrap();
        assert!((cv - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_known_std_dev() {
        // [1,2,3,4]: mean 2.5, sum of squared deviations 5, sample
        // variance 5/3
        let sd = std_dev(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((sd - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample_fails() {
        assert_eq!(
            std_dev(&[42.0]),
            Err(StatsError::InsufficientSamples { got: 1 })
        );
        assert_eq!(
            compute_series(&[42.0]),
            Err(StatsError::InsufficientSamples { got: 1 })
        );
    }

    #[test]
    fn test_zero_mean_is_degenerate() {
        assert_eq!(
            coefficient_of_variation(&[0.0, 0.0, 0.0]),
            Err(StatsError::DegenerateDistribution)
        );
        // Cancelling signs degenerate too
        assert_eq!(
            coefficient_of_variation(&[-1.0, 1.0]),
            Err(StatsError::DegenerateDistribution)
        );
    }

    #[test]
    fn test_compute_series() {
        let stats = compute_series(&[10.0, 20.0]).unwrap();
        assert_eq!(stats.mean, 15.0);
        assert_eq!(stats.sample_count, 2);
        // sd = sqrt((25 + 25) / 1) = 7.0710678...
        assert!((stats.std_dev - 50.0f64.sqrt()).abs() < 1e-12);
        assert!((stats.coeff_var_pct - 50.0f64.sqrt() / 15.0 * 100.0).abs() < 1e-12);
    }
}
