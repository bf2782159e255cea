//! Cohen's d effect size

use super::descriptive::{mean, sample_variance};
use super::{require_len, Result, StatsError};
use std::fmt;

/// Conventional interpretation of |d|
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectMagnitude {
    Negligible,
    Small,
    Medium,
    Large,
}

impl EffectMagnitude {
    /// Classifies a Cohen's d value using the 0.2 / 0.5 / 0.8 thresholds
    pub fn classify(d: f64) -> Self {
        match d.abs() {
            d if d < 0.2 => EffectMagnitude::Negligible,
            d if d < 0.5 => EffectMagnitude::Small,
            d if d < 0.8 => EffectMagnitude::Medium,
            _ => EffectMagnitude::Large,
        }
    }
}

impl fmt::Display for EffectMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EffectMagnitude::Negligible => "negligible",
            EffectMagnitude::Small => "small",
            EffectMagnitude::Medium => "medium",
            EffectMagnitude::Large => "large",
        };
        f.write_str(text)
    }
}

/// Standardized mean difference between two groups
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSize {
    pub cohens_d: f64,
    pub pooled_std_dev: f64,
    pub magnitude: EffectMagnitude,
}

/// Cohen's d: `(mean(x) - mean(y)) / pooled standard deviation`
///
/// The pooled standard deviation combines Bessel-corrected variances:
/// `sqrt(((nx - 1) * var(x) + (ny - 1) * var(y)) / (nx + ny - 2))`.
///
/// # Errors
/// * [`StatsError::InsufficientSampleSize`] when either group has fewer than 2 values
/// * [`StatsError::ZeroVariance`] when both groups are constant
pub fn cohens_d(x: &[f64], y: &[f64]) -> Result<EffectSize> {
    require_len(x, 2)?;
    require_len(y, 2)?;

    let (nx, ny) = (x.len() as f64, y.len() as f64);
    let pooled_variance =
        ((nx - 1.0) * sample_variance(x)? + (ny - 1.0) * sample_variance(y)?) / (nx + ny - 2.0);
    if pooled_variance <= 0.0 {
        return Err(StatsError::ZeroVariance);
    }

    let pooled_std_dev = pooled_variance.sqrt();
    let d = (mean(x)? - mean(y)?) / pooled_std_dev;

    Ok(EffectSize {
        cohens_d: d,
        pooled_std_dev,
        magnitude: EffectMagnitude::classify(d),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[test]
    fn hand_computed_example() {
        // pooled_std = sqrt((2 * 1 + 2 * 1) / 4) = 1
        let effect = cohens_d(&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]).unwrap();

        assert_abs_diff_eq!(effect.pooled_std_dev, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(effect.cohens_d, -1.0, epsilon = 1e-12);
        assert_eq!(effect.magnitude, EffectMagnitude::Large);
    }

    #[test]
    fn unequal_group_sizes() {
        let effect = cohens_d(
            &[19.1, 20.3, 18.7, 21.5, 22.0, 20.9],
            &[17.2, 18.9, 16.5, 19.8, 18.1],
        )
        .unwrap();

        assert_abs_diff_eq!(effect.cohens_d, 1.764827, epsilon = 1e-5);
    }

    #[test]
    fn identical_means_give_zero() {
        let effect = cohens_d(&[1.0, 3.0], &[0.0, 4.0]).unwrap();
        assert_abs_diff_eq!(effect.cohens_d, 0.0);
        assert_eq!(effect.magnitude, EffectMagnitude::Negligible);
    }

    #[rstest]
    #[case(0.0, EffectMagnitude::Negligible)]
    #[case(0.19, EffectMagnitude::Negligible)]
    #[case(0.2, EffectMagnitude::Small)]
    #[case(-0.49, EffectMagnitude::Small)]
    #[case(0.5, EffectMagnitude::Medium)]
    #[case(-0.8, EffectMagnitude::Large)]
    #[case(2.5, EffectMagnitude::Large)]
    fn magnitude_thresholds(#[case] d: f64, #[case] expected: EffectMagnitude) {
        assert_eq!(EffectMagnitude::classify(d), expected);
    }

    #[rstest]
    #[case::empty(&[])]
    #[case::single(&[1.0])]
    fn rejects_insufficient_sample_size(#[case] small: &[f64]) {
        assert_eq!(
            cohens_d(small, &[1.0, 2.0]).unwrap_err(),
            StatsError::InsufficientSampleSize {
                required: 2,
                actual: small.len()
            }
        );
    }

    #[test]
    fn rejects_two_constant_groups() {
        assert_eq!(
            cohens_d(&[3.0, 3.0], &[5.0, 5.0, 5.0]).unwrap_err(),
            StatsError::ZeroVariance
        );
    }
}
