//! Shapiro-Wilk normality test
//!
//! Implements Royston's approximation (Applied Statistics algorithm AS R94):
//! polynomial approximations for the extreme weights, normal scores for the
//! rest, and normalizing transformations of W for the p-value.

use super::descriptive::sorted_copy;
use super::{require_len, Result, StatsError};
use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_3, PI};
use tracing::warn;

/// Smallest sample the test is defined for
pub const MIN_SAMPLE_SIZE: usize = 3;

/// Largest sample the approximation is valid for
pub const MAX_SAMPLE_SIZE: usize = 5000;

/// Polynomial for the largest weight, in 1/sqrt(n)
const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.07119, 4.434685, -2.706056];

/// Polynomial for the second largest weight, in 1/sqrt(n)
const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];

/// Mean of the transformed statistic for 4 <= n <= 11, in n
const C3: [f64; 4] = [0.544, -0.39978, 0.025054, -6.714e-4];

/// Log standard deviation of the transformed statistic for 4 <= n <= 11, in n
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -0.0020322];

/// Mean of log(1 - W) for n >= 12, in ln(n)
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];

/// Log standard deviation of log(1 - W) for n >= 12, in ln(n)
const C6: [f64; 3] = [-0.4803, -0.082676, 0.0030302];

/// Upper bound of log(1 - W) for 4 <= n <= 11, in n
const G: [f64; 2] = [-2.273, 0.459];

/// P-value reported when W lies beyond the small-sample bound
const SMALLEST_P_VALUE: f64 = 1e-99;

/// Outcome of a Shapiro-Wilk test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapiroWilkResult {
    /// Number of values tested
    pub sample_size: usize,
    /// W statistic, in (0, 1]
    pub statistic: f64,
    pub p_value: f64,
}

/// Tests the null hypothesis that `values` were drawn from a normal distribution
///
/// A sample whose values are all identical reports W = 1 and p = 1 and
/// logs a warning.
///
/// # Errors
/// * [`StatsError::InsufficientSampleSize`] for fewer than 3 values
/// * [`StatsError::SampleTooLarge`] for more than 5000 values. The runner
///   caps its subsample at 300, so only direct library callers can hit this.
pub fn shapiro_wilk(values: &[f64]) -> Result<ShapiroWilkResult> {
    require_len(values, MIN_SAMPLE_SIZE)?;
    if values.len() > MAX_SAMPLE_SIZE {
        return Err(StatsError::SampleTooLarge {
            max: MAX_SAMPLE_SIZE,
            actual: values.len(),
        });
    }

    let sorted = sorted_copy(values);
    let n = sorted.len();
    if sorted[n - 1] - sorted[0] <= 0.0 {
        warn!(
            sample_size = n,
            value = sorted[0],
            "Normality sample has zero range, reporting W = 1 and p = 1"
        );
        return Ok(ShapiroWilkResult {
            sample_size: n,
            statistic: 1.0,
            p_value: 1.0,
        });
    }

    let weights = weights(n)?;
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let sum_sq: f64 = sorted.iter().map(|value| (value - mean).powi(2)).sum();
    let numerator: f64 = weights
        .iter()
        .enumerate()
        .map(|(i, weight)| weight * (sorted[n - 1 - i] - sorted[i]))
        .sum();

    let statistic = (numerator * numerator / sum_sq).min(1.0);
    let p_value = p_value(statistic, n)?;

    Ok(ShapiroWilkResult {
        sample_size: n,
        statistic,
        p_value,
    })
}

/// Weights for the lower half of the ordered sample (largest first)
fn weights(n: usize) -> Result<Vec<f64>> {
    if n == 3 {
        return Ok(vec![FRAC_1_SQRT_2]);
    }

    let standard = normal(0.0, 1.0)?;
    let half = n / 2;
    let an25 = n as f64 + 0.25;
    let scores: Vec<f64> = (1..=half)
        .map(|i| -standard.inverse_cdf((i as f64 - 0.375) / an25))
        .collect();

    let summ2 = 2.0 * scores.iter().map(|score| score * score).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / (n as f64).sqrt();

    let mut weights = vec![0.0; half];
    weights[0] = scores[0] / ssumm2 + poly(&C1, rsn);

    let (first, fac) = if n > 5 {
        weights[1] = scores[1] / ssumm2 + poly(&C2, rsn);
        let fac = ((summ2 - 2.0 * scores[0].powi(2) - 2.0 * scores[1].powi(2))
            / (1.0 - 2.0 * weights[0].powi(2) - 2.0 * weights[1].powi(2)))
        .sqrt();
        (2, fac)
    } else {
        let fac = ((summ2 - 2.0 * scores[0].powi(2)) / (1.0 - 2.0 * weights[0].powi(2))).sqrt();
        (1, fac)
    };

    for i in first..half {
        weights[i] = scores[i] / fac;
    }

    Ok(weights)
}

fn p_value(statistic: f64, n: usize) -> Result<f64> {
    if n == 3 {
        // Exact distribution for three observations
        let p = 6.0 / PI * (statistic.sqrt().asin() - FRAC_PI_3);
        return Ok(p.max(0.0));
    }

    if statistic >= 1.0 {
        return Ok(1.0);
    }

    let an = n as f64;
    let w1 = (1.0 - statistic).ln();

    if n <= 11 {
        let gamma = poly(&G, an);
        if w1 >= gamma {
            return Ok(SMALLEST_P_VALUE);
        }

        let y = -(gamma - w1).ln();
        let transformed = normal(poly(&C3, an), poly(&C4, an).exp())?;
        Ok(transformed.sf(y))
    } else {
        let ln_n = an.ln();
        let transformed = normal(poly(&C5, ln_n), poly(&C6, ln_n).exp())?;
        Ok(transformed.sf(w1))
    }
}

/// Evaluates `coefficients[0] + coefficients[1] * x + ...`
fn poly(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, coefficient| acc * x + coefficient)
}

fn normal(mean: f64, std_dev: f64) -> Result<Normal> {
    Normal::new(mean, std_dev).map_err(|e| StatsError::Distribution(e.to_string()))
}
