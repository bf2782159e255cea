//! Statistical evaluation of the two attendance groups
//!
//! This module contains:
//! - Descriptive statistics and group summaries
//! - Seeded subsampling for the normality check
//! - Shapiro-Wilk normality test
//! - Levene variance homogeneity test
//! - Welch and Student two-sample t-tests with one-tailed conversion
//! - Cohen's d effect size

pub mod constants;
pub mod descriptive;
pub mod effect_size;
pub mod normality;
pub mod sampling;
pub mod ttest;
pub mod variance;

use thiserror::Error;

// Re-export analysis functions for convenience
pub use descriptive::{mean, median, percentile_of_sorted, sample_variance, GroupSummary};
pub use effect_size::{cohens_d, EffectMagnitude, EffectSize};
pub use normality::{shapiro_wilk, ShapiroWilkResult};
pub use sampling::sample_without_replacement;
pub use ttest::{
    mean_difference_test, one_tailed_p_value, student_t_test, welch_t_test, TTestKind,
    TTestResult, VariancePolicy,
};
pub use variance::{levene, LeveneResult};

/// Errors that can occur during statistical evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Insufficient sample size: need at least {required} values, got {actual}")]
    InsufficientSampleSize { required: usize, actual: usize },

    #[error("Insufficient sample size in group '{group}': need at least {required} values, got {actual}")]
    GroupTooSmall {
        group: String,
        required: usize,
        actual: usize,
    },

    #[error("Sample too large: at most {max} values supported, got {actual}")]
    SampleTooLarge { max: usize, actual: usize },

    #[error("Zero variance: all values are identical, statistic is undefined")]
    ZeroVariance,

    #[error("Failed to construct distribution: {0}")]
    Distribution(String),
}

pub(crate) type Result<T> = core::result::Result<T, StatsError>;

/// Fails with [`StatsError::InsufficientSampleSize`] when `values` is shorter than `required`
pub(crate) fn require_len(values: &[f64], required: usize) -> Result<()> {
    if values.len() < required {
        return Err(StatsError::InsufficientSampleSize {
            required,
            actual: values.len(),
        });
    }

    Ok(())
}

/// Fails with [`StatsError::GroupTooSmall`] when a named group is shorter than `required`
pub fn ensure_group_size(group: &str, values: &[f64], required: usize) -> Result<()> {
    if values.len() < required {
        return Err(StatsError::GroupTooSmall {
            group: group.to_string(),
            required,
            actual: values.len(),
        });
    }

    Ok(())
}
