//! Levene's test for equality of variances
//!
//! Uses the Brown-Forsythe variant: absolute deviations are taken from each
//! group's median, which keeps the test robust to non-normal data.

use super::descriptive::{mean, median};
use super::{require_len, Result, StatsError};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// Outcome of a Levene test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeveneResult {
    /// W statistic, F-distributed with (k - 1, N - k) degrees of freedom
    pub statistic: f64,
    pub p_value: f64,
}

/// Tests the null hypothesis that all `groups` share the same variance
///
/// Needs at least two groups, each with at least two values.
pub fn levene(groups: &[&[f64]]) -> Result<LeveneResult> {
    if groups.len() < 2 {
        return Err(StatsError::InsufficientSampleSize {
            required: 2,
            actual: groups.len(),
        });
    }

    for group in groups {
        require_len(group, 2)?;
    }

    let deviations = groups
        .iter()
        .map(|group| -> Result<Vec<f64>> {
            let center = median(group)?;
            Ok(group.iter().map(|value| (value - center).abs()).collect())
        })
        .collect::<Result<Vec<_>>>()?;

    let group_means = deviations
        .iter()
        .map(|group| mean(group))
        .collect::<Result<Vec<f64>>>()?;

    let total: usize = deviations.iter().map(Vec::len).sum();
    let grand_mean = deviations.iter().flatten().sum::<f64>() / total as f64;

    let between: f64 = deviations
        .iter()
        .zip(&group_means)
        .map(|(group, group_mean)| group.len() as f64 * (group_mean - grand_mean).powi(2))
        .sum();
    let within: f64 = deviations
        .iter()
        .zip(&group_means)
        .map(|(group, group_mean)| {
            group
                .iter()
                .map(|deviation| (deviation - group_mean).powi(2))
                .sum::<f64>()
        })
        .sum();

    if within <= 0.0 {
        return Err(StatsError::ZeroVariance);
    }

    let k = groups.len() as f64;
    let n = total as f64;
    let statistic = (n - k) / (k - 1.0) * between / within;

    let distribution = FisherSnedecor::new(k - 1.0, n - k)
        .map_err(|e| StatsError::Distribution(e.to_string()))?;

    Ok(LeveneResult {
        statistic,
        p_value: distribution.sf(statistic),
    })
}
