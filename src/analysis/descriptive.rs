//! Descriptive statistics
//!
//! Means, Bessel-corrected variances, quantiles and the per-group summary
//! printed at the top of the report.

use super::{require_len, Result};

/// Arithmetic mean; fails on an empty slice
pub fn mean(values: &[f64]) -> Result<f64> {
    require_len(values, 1)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance with Bessel's correction (n - 1); needs at least 2 values
pub fn sample_variance(values: &[f64]) -> Result<f64> {
    require_len(values, 2)?;
    let mean = mean(values)?;
    let sum_sq: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
    Ok(sum_sq / (values.len() - 1) as f64)
}

/// Median of unsorted values; fails on an empty slice
pub fn median(values: &[f64]) -> Result<f64> {
    require_len(values, 1)?;
    let sorted = sorted_copy(values);
    Ok(percentile_of_sorted(&sorted, 50.0))
}

/// Percentile of ascending-sorted data using linear interpolation between
/// closest ranks
///
/// `percentile` is in the range 0..=100. Returns NaN for empty input.
pub fn percentile_of_sorted(sorted: &[f64], percentile: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        len => {
            let rank = (percentile / 100.0).clamp(0.0, 1.0) * (len - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            let weight = rank - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * weight
        }
    }
}

/// Copy of `values` sorted in ascending order
pub(crate) fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    sorted
}

/// Count, central tendency and spread of one attendance group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub label: String,
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

impl GroupSummary {
    /// Summarizes a group; needs at least 2 values for the standard deviation
    pub fn new(label: &str, values: &[f64]) -> Result<Self> {
        let sorted = sorted_copy(values);
        let std_dev = sample_variance(values)?.sqrt();

        Ok(Self {
            label: label.to_string(),
            count: values.len(),
            mean: mean(values)?,
            std_dev,
            min: sorted[0],
            median: percentile_of_sorted(&sorted, 50.0),
            max: sorted[sorted.len() - 1],
        })
    }
}
