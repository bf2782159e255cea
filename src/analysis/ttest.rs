//! Two-sample t-tests for a difference in means
//!
//! The statistic is always oriented as `mean(x) - mean(y)`. Callers pass the
//! trained group first so a positive statistic favours the trained group.

use super::descriptive::{mean, sample_variance};
use super::variance::LeveneResult;
use super::{require_len, Result, StatsError};
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::fmt;

/// Which two-sample t-test was run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TTestKind {
    /// Unequal variances, Welch-Satterthwaite degrees of freedom
    Welch,
    /// Pooled variance, n1 + n2 - 2 degrees of freedom
    Student,
}

impl fmt::Display for TTestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TTestKind::Welch => write!(f, "Welch"),
            TTestKind::Student => write!(f, "Student"),
        }
    }
}

/// How the equal-variance assumption is decided
///
/// The default applies Welch's test regardless of what Levene's test found.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum VariancePolicy {
    /// Always use the unequal-variance (Welch) test
    #[default]
    AlwaysUnequal,
    /// Use Student's pooled test when Levene's p-value is at least `alpha`,
    /// otherwise Welch's test
    FollowHomogeneityTest { alpha: f64 },
}

impl VariancePolicy {
    /// Picks the test for the given homogeneity result
    pub fn select(&self, homogeneity: &LeveneResult) -> TTestKind {
        match self {
            VariancePolicy::AlwaysUnequal => TTestKind::Welch,
            VariancePolicy::FollowHomogeneityTest { alpha } => {
                if homogeneity.p_value >= *alpha {
                    TTestKind::Student
                } else {
                    TTestKind::Welch
                }
            }
        }
    }
}

/// Outcome of a two-sample t-test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTestResult {
    pub kind: TTestKind,
    pub statistic: f64,
    pub degrees_of_freedom: f64,
    /// Two-tailed p-value
    pub p_value: f64,
}

impl TTestResult {
    /// One-tailed p-value for the alternative `mean(x) > mean(y)`
    pub fn one_tailed_p_value(&self) -> f64 {
        one_tailed_p_value(self.p_value, self.statistic)
    }
}

/// Welch's unequal-variance t-test
pub fn welch_t_test(x: &[f64], y: &[f64]) -> Result<TTestResult> {
    require_len(x, 2)?;
    require_len(y, 2)?;

    let (nx, ny) = (x.len() as f64, y.len() as f64);
    let vx = sample_variance(x)? / nx;
    let vy = sample_variance(y)? / ny;
    let standard_error_sq = vx + vy;
    if standard_error_sq <= 0.0 {
        return Err(StatsError::ZeroVariance);
    }

    let statistic = (mean(x)? - mean(y)?) / standard_error_sq.sqrt();
    let degrees_of_freedom =
        standard_error_sq.powi(2) / (vx.powi(2) / (nx - 1.0) + vy.powi(2) / (ny - 1.0));

    two_tailed(TTestKind::Welch, statistic, degrees_of_freedom)
}

/// Student's pooled-variance t-test
pub fn student_t_test(x: &[f64], y: &[f64]) -> Result<TTestResult> {
    require_len(x, 2)?;
    require_len(y, 2)?;

    let (nx, ny) = (x.len() as f64, y.len() as f64);
    let degrees_of_freedom = nx + ny - 2.0;
    let pooled = ((nx - 1.0) * sample_variance(x)? + (ny - 1.0) * sample_variance(y)?)
        / degrees_of_freedom;
    if pooled <= 0.0 {
        return Err(StatsError::ZeroVariance);
    }

    let statistic = (mean(x)? - mean(y)?) / (pooled * (1.0 / nx + 1.0 / ny)).sqrt();

    two_tailed(TTestKind::Student, statistic, degrees_of_freedom)
}

/// Runs the t-test chosen by `policy` for the given homogeneity result
pub fn mean_difference_test(
    x: &[f64],
    y: &[f64],
    policy: VariancePolicy,
    homogeneity: &LeveneResult,
) -> Result<TTestResult> {
    match policy.select(homogeneity) {
        TTestKind::Welch => welch_t_test(x, y),
        TTestKind::Student => student_t_test(x, y),
    }
}

/// Converts a two-tailed p-value into a one-tailed p-value for the
/// alternative "first mean > second mean"
///
/// Halves the p-value when the statistic is positive; otherwise returns
/// `1 - p / 2`.
pub fn one_tailed_p_value(two_tailed_p: f64, statistic: f64) -> f64 {
    if statistic > 0.0 {
        two_tailed_p / 2.0
    } else {
        1.0 - two_tailed_p / 2.0
    }
}

fn two_tailed(kind: TTestKind, statistic: f64, degrees_of_freedom: f64) -> Result<TTestResult> {
    let distribution = StudentsT::new(0.0, 1.0, degrees_of_freedom)
        .map_err(|e| StatsError::Distribution(e.to_string()))?;

    Ok(TTestResult {
        kind,
        statistic,
        degrees_of_freedom,
        p_value: (2.0 * distribution.sf(statistic.abs())).min(1.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    const TRAINED: [f64; 6] = [19.1, 20.3, 18.7, 21.5, 22.0, 20.9];
    const UNTRAINED: [f64; 5] = [17.2, 18.9, 16.5, 19.8, 18.1];

    fn levene_with_p(p_value: f64) -> LeveneResult {
        LeveneResult {
            statistic: 1.0,
            p_value,
        }
    }

    #[test]
    fn welch_matches_reference_values() {
        let result = welch_t_test(&TRAINED, &UNTRAINED).unwrap();

        assert_eq!(result.kind, TTestKind::Welch);
        assert_abs_diff_eq!(result.statistic, 2.914232, epsilon = 1e-5);
        assert_abs_diff_eq!(result.degrees_of_freedom, 8.639594, epsilon = 1e-5);
        assert_abs_diff_eq!(result.p_value, 0.017939, epsilon = 1e-5);
    }

    #[test]
    fn welch_with_negative_difference() {
        let result =
            welch_t_test(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0])
                .unwrap();

        assert_abs_diff_eq!(result.statistic, -2.809757, epsilon = 1e-5);
        assert_abs_diff_eq!(result.degrees_of_freedom, 8.037106, epsilon = 1e-5);
        assert_abs_diff_eq!(result.p_value, 0.022747, epsilon = 1e-5);
        assert_abs_diff_eq!(result.one_tailed_p_value(), 1.0 - 0.022747 / 2.0, epsilon = 1e-5);
    }

    #[test]
    fn student_matches_reference_values() {
        let result = student_t_test(&TRAINED, &UNTRAINED).unwrap();

        assert_eq!(result.kind, TTestKind::Student);
        assert_abs_diff_eq!(result.statistic, 2.914517, epsilon = 1e-5);
        assert_abs_diff_eq!(result.degrees_of_freedom, 9.0);
        assert_abs_diff_eq!(result.p_value, 0.017184, epsilon = 1e-5);
    }

    #[test]
    fn swapping_groups_flips_the_sign() {
        let forward = welch_t_test(&TRAINED, &UNTRAINED).unwrap();
        let backward = welch_t_test(&UNTRAINED, &TRAINED).unwrap();

        assert_abs_diff_eq!(forward.statistic, -backward.statistic, epsilon = 1e-12);
        assert_abs_diff_eq!(forward.p_value, backward.p_value, epsilon = 1e-12);
    }

    #[rstest]
    #[case::positive(0.04, 1.5, 0.02)]
    #[case::negative(0.04, -1.5, 0.98)]
    #[case::zero(1.0, 0.0, 0.5)]
    fn one_tailed_conversion(#[case] two_tailed: f64, #[case] statistic: f64, #[case] expected: f64) {
        assert_abs_diff_eq!(one_tailed_p_value(two_tailed, statistic), expected, epsilon = 1e-12);
    }

    #[test]
    fn default_policy_always_uses_welch() {
        let policy = VariancePolicy::default();

        assert_eq!(policy, VariancePolicy::AlwaysUnequal);
        assert_eq!(policy.select(&levene_with_p(0.9)), TTestKind::Welch);
        assert_eq!(policy.select(&levene_with_p(0.001)), TTestKind::Welch);
    }

    #[test]
    fn homogeneity_policy_follows_levene() {
        let policy = VariancePolicy::FollowHomogeneityTest { alpha: 0.05 };

        assert_eq!(policy.select(&levene_with_p(0.9)), TTestKind::Student);
        assert_eq!(policy.select(&levene_with_p(0.05)), TTestKind::Student);
        assert_eq!(policy.select(&levene_with_p(0.01)), TTestKind::Welch);
    }

    #[test]
    fn mean_difference_test_applies_policy() {
        let homogeneous = levene_with_p(0.9);

        let welch = mean_difference_test(
            &TRAINED,
            &UNTRAINED,
            VariancePolicy::AlwaysUnequal,
            &homogeneous,
        )
        .unwrap();
        let student = mean_difference_test(
            &TRAINED,
            &UNTRAINED,
            VariancePolicy::FollowHomogeneityTest { alpha: 0.05 },
            &homogeneous,
        )
        .unwrap();

        assert_eq!(welch.kind, TTestKind::Welch);
        assert_eq!(student.kind, TTestKind::Student);
    }

    #[rstest]
    #[case::empty(&[])]
    #[case::single(&[3.0])]
    fn rejects_groups_smaller_than_two(#[case] small: &[f64]) {
        assert!(matches!(
            welch_t_test(&TRAINED, small),
            Err(StatsError::InsufficientSampleSize { required: 2, .. })
        ));
        assert!(matches!(
            student_t_test(small, &UNTRAINED),
            Err(StatsError::InsufficientSampleSize { required: 2, .. })
        ));
    }

    #[test]
    fn rejects_constant_groups() {
        assert_eq!(
            welch_t_test(&[1.0, 1.0], &[2.0, 2.0]).unwrap_err(),
            StatsError::ZeroVariance
        );
        assert_eq!(
            student_t_test(&[1.0, 1.0], &[2.0, 2.0]).unwrap_err(),
            StatsError::ZeroVariance
        );
    }
}
