//! The analysis runner
//!
//! Load, clean, partition, evaluate, report. Each stage runs once, in order,
//! and every result is written to the output as soon as it is computed.

use crate::analysis::constants::{
    MIN_GROUP_SIZE, NORMALITY_SAMPLE_CAP, SAMPLING_SEED, SIGNIFICANCE_LEVEL, TRAINED_LABEL,
    UNTRAINED_LABEL,
};
use crate::analysis::{
    cohens_d, ensure_group_size, levene, mean_difference_test, sample_without_replacement,
    shapiro_wilk, EffectSize, GroupSummary, LeveneResult, ShapiroWilkResult, TTestResult,
    VariancePolicy,
};
use crate::common::plots::create_performance_boxplot;
use crate::common::Groups;
use crate::config::AnalysisConfig;
use crate::parsing::load_dataset;
use crate::report::{
    format_conclusion, format_effect_size, format_group_summary, format_levene, format_normality,
    format_plot_saved, format_t_test, Conclusion,
};
use crate::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Every statistic computed for the two attendance groups
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Trained group first, untrained second
    pub summaries: Vec<GroupSummary>,
    pub trained_normality: ShapiroWilkResult,
    pub untrained_normality: ShapiroWilkResult,
    pub homogeneity: LeveneResult,
    pub t_test: TTestResult,
    pub one_tailed_p: f64,
    pub effect_size: EffectSize,
    pub conclusion: Conclusion,
}

/// Result of a complete run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub rows_loaded: usize,
    pub rows_cleaned: usize,
    pub groups: Groups,
    pub evaluation: Evaluation,
    pub plot_path: PathBuf,
}

/// Runs the whole analysis described by `config`, writing the report to `out`
///
/// # Returns
/// * `Ok(AnalysisOutcome)` - Everything that was printed, plus the plot location
/// * `Err(AnalysisError)` - The first failure; nothing after it is attempted
pub fn run<W: Write>(config: &AnalysisConfig, out: &mut W) -> Result<AnalysisOutcome> {
    writeln!(
        out,
        "✅ Loading dataset from: {}",
        config.input_path.display()
    )?;
    let dataset = load_dataset(&config.input_path)?;
    let rows_loaded = dataset.len();
    writeln!(out, "✅ Dataset loaded. Rows: {}", rows_loaded)?;

    let rows = dataset.drop_missing();
    let rows_cleaned = rows.len();
    info!(
        loaded = rows_loaded,
        kept = rows_cleaned,
        dropped = rows_loaded - rows_cleaned,
        "Dropped rows with missing attendance or score"
    );

    let groups = Groups::partition(&rows);
    if groups.unmatched > 0 {
        warn!(
            unmatched = groups.unmatched,
            "Rows with an attendance value other than '{}' or '{}' belong to neither group",
            TRAINED_LABEL,
            UNTRAINED_LABEL
        );
    }

    let evaluation = evaluate_groups(&groups, config.variance_policy, out)?;

    let plot_path = create_performance_boxplot(&rows, &config.output_dir)?;
    write!(out, "{}", format_plot_saved(&plot_path))?;
    info!(path = %plot_path.display(), "Boxplot written");

    Ok(AnalysisOutcome {
        rows_loaded,
        rows_cleaned,
        groups,
        evaluation,
        plot_path,
    })
}

/// Runs every statistical test on the trained and untrained groups
///
/// Both groups must hold at least two scores; the normality check further
/// needs three.
pub fn evaluate_groups<W: Write>(
    groups: &Groups,
    policy: VariancePolicy,
    out: &mut W,
) -> Result<Evaluation> {
    ensure_group_size(TRAINED_LABEL, &groups.trained, MIN_GROUP_SIZE)?;
    ensure_group_size(UNTRAINED_LABEL, &groups.untrained, MIN_GROUP_SIZE)?;

    // Descriptive statistics
    let summaries = vec![
        GroupSummary::new(TRAINED_LABEL, &groups.trained)?,
        GroupSummary::new(UNTRAINED_LABEL, &groups.untrained)?,
    ];
    write!(out, "{}", format_group_summary(&summaries))?;

    // Normality, on a bounded subsample of each group
    let sample_size = groups
        .trained
        .len()
        .min(groups.untrained.len())
        .min(NORMALITY_SAMPLE_CAP);
    debug!(sample_size, seed = SAMPLING_SEED, "Drawing normality subsample");
    let trained_normality = shapiro_wilk(&sample_without_replacement(
        &groups.trained,
        sample_size,
        SAMPLING_SEED,
    ))?;
    let untrained_normality = shapiro_wilk(&sample_without_replacement(
        &groups.untrained,
        sample_size,
        SAMPLING_SEED,
    ))?;
    write!(
        out,
        "{}",
        format_normality(&trained_normality, &untrained_normality, SAMPLING_SEED)
    )?;

    // Variance homogeneity, on the full groups
    let homogeneity = levene(&[&groups.trained[..], &groups.untrained[..]])?;
    write!(out, "{}", format_levene(&homogeneity))?;

    // Mean difference, oriented as trained - untrained
    let t_test = mean_difference_test(&groups.trained, &groups.untrained, policy, &homogeneity)?;
    let one_tailed_p = t_test.one_tailed_p_value();
    debug!(?policy, kind = %t_test.kind, "Mean difference test selected");
    write!(out, "{}", format_t_test(&t_test))?;

    let effect_size = cohens_d(&groups.trained, &groups.untrained)?;
    write!(out, "{}", format_effect_size(&effect_size))?;

    let conclusion = Conclusion::from_p_value(one_tailed_p, SIGNIFICANCE_LEVEL);
    write!(out, "{}", format_conclusion(conclusion))?;

    Ok(Evaluation {
        summaries,
        trained_normality,
        untrained_normality,
        homogeneity,
        t_test,
        one_tailed_p,
        effect_size,
        conclusion,
    })
}

