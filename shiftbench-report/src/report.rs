//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shiftbench_stats::{compute_series, StatsError};

/// Summary row for one input size, derived from exactly one trial set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeSummary {
    /// Input size
    pub size: usize,
    /// Mean critical operation count across trials
    pub mean_count: f64,
    /// Coefficient of variation of the count series, percent
    pub coeff_var_count: f64,
    /// Mean elapsed time across trials, nanoseconds
    pub mean_time_ns: f64,
    /// Coefficient of variation of the time series, percent
    pub coeff_var_time: f64,
}

impl SizeSummary {
    /// Reduce one size's count and time series to a summary row.
    ///
    /// Both series come from the same trial set and are reduced
    /// independently.
    pub fn from_series(size: usize, counts: &[f64], times: &[f64]) -> Result<Self, StatsError> {
        let count_stats = compute_series(counts)?;
        let time_stats = compute_series(times)?;
        Ok(Self {
            size,
            mean_count: count_stats.mean,
            coeff_var_count: count_stats.coeff_var_pct,
            mean_time_ns: time_stats.mean,
            coeff_var_time: time_stats.coeff_var_pct,
        })
    }
}

/// Complete summary report for one variant's trial data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Provenance and configuration echo
    pub meta: ReportMeta,
    /// One row per input size, in processing order
    pub rows: Vec<SizeSummary>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Report schema version
    pub schema_version: u32,
    /// Crate version that produced the report
    pub version: String,
    /// When the report was generated
    pub timestamp: DateTime<Utc>,
    /// Trials per input size in the underlying data
    pub trials_per_size: usize,
    /// Where the rows came from (variant label or raw file path)
    pub source: String,
}

impl ReportMeta {
    /// Metadata for a report generated now by this crate version.
    pub fn new(trials_per_size: usize, source: impl Into<String>) -> Self {
        Self {
            schema_version: 1,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            trials_per_size,
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_series() {
        let row = SizeSummary::from_series(500, &[10.0, 20.0], &[100.0, 200.0]).unwrap();
        assert_eq!(row.size, 500);
        assert_eq!(row.mean_count, 15.0);
        assert_eq!(row.mean_time_ns, 150.0);
        assert!(row.coeff_var_count > 0.0);
    }

    #[test]
    fn test_summary_propagates_stats_errors() {
        assert_eq!(
            SizeSummary::from_series(500, &[10.0], &[100.0]),
            Err(StatsError::InsufficientSamples { got: 1 })
        );
        assert_eq!(
            SizeSummary::from_series(500, &[0.0, 0.0], &[100.0, 200.0]),
            Err(StatsError::DegenerateDistribution)
        );
    }

    #[test]
    fn test_meta_carries_source() {
        let meta = ReportMeta::new(50, "iterative");
        assert_eq!(meta.schema_version, 1);
        assert_eq!(meta.trials_per_size, 50);
        assert_eq!(meta.source, "iterative");
    }
}
