//! Console report sections and the final conclusion
//!
//! Each formatter returns one section of the human-readable report, headed by
//! a `--- Title ---` line. The text is meant for reading, not parsing.

use crate::analysis::constants::{TRAINED_LABEL, UNTRAINED_LABEL};
use crate::analysis::{EffectSize, GroupSummary, LeveneResult, ShapiroWilkResult, TTestResult};
use crate::common::summary::format_summary_table;
use std::fmt;
use std::path::Path;

/// Outcome of the one-tailed hypothesis test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conclusion {
    /// The trained group scores significantly higher
    RejectNull,
    /// No significant evidence the trained group scores higher
    FailToReject,
}

impl Conclusion {
    /// Rejects the null hypothesis when `one_tailed_p` is strictly below `alpha`
    pub fn from_p_value(one_tailed_p: f64, alpha: f64) -> Self {
        if one_tailed_p < alpha {
            Conclusion::RejectNull
        } else {
            Conclusion::FailToReject
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Conclusion::RejectNull => {
                "✅ Reject H0: Training improves performance (statistically significant)."
            }
            Conclusion::FailToReject => {
                "❌ Fail to reject H0: No strong evidence training improves performance."
            }
        }
    }
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

fn heading(title: &str) -> String {
    format!("\n--- {} ---\n", title)
}

pub fn format_group_summary(summaries: &[GroupSummary]) -> String {
    format!(
        "{}{}\n",
        heading("Group Summary"),
        format_summary_table(summaries)
    )
}

/// Shapiro-Wilk results for the trained and untrained samples
pub fn format_normality(
    trained: &ShapiroWilkResult,
    untrained: &ShapiroWilkResult,
    seed: u64,
) -> String {
    format!(
        "{}Sample size per group: {} (seed {})\n\
         {:<3} W: {:.4}  p-value: {}\n\
         {:<3} W: {:.4}  p-value: {}\n",
        heading("Shapiro Test"),
        trained.sample_size,
        seed,
        TRAINED_LABEL,
        trained.statistic,
        trained.p_value,
        UNTRAINED_LABEL,
        untrained.statistic,
        untrained.p_value,
    )
}

pub fn format_levene(result: &LeveneResult) -> String {
    format!(
        "{}statistic: {:.4}\np-value: {}\n",
        heading("Levene Test"),
        result.statistic,
        result.p_value
    )
}

pub fn format_t_test(result: &TTestResult) -> String {
    format!(
        "{}t-stat: {}\ndegrees of freedom: {:.2}\ntwo-tailed p: {}\none-tailed  p: {}\n",
        heading(&format!("{} T-Test", result.kind)),
        result.statistic,
        result.degrees_of_freedom,
        result.p_value,
        result.one_tailed_p_value()
    )
}

pub fn format_effect_size(effect: &EffectSize) -> String {
    format!(
        "{}Cohen's d: {:.3} ({})\n",
        heading("Effect Size"),
        effect.cohens_d,
        effect.magnitude
    )
}

pub fn format_conclusion(conclusion: Conclusion) -> String {
    format!("{}{}\n", heading("Conclusion"), conclusion)
}

pub fn format_plot_saved(path: &Path) -> String {
    format!("\n📌 Plot saved to: {}\n", path.display())
}
