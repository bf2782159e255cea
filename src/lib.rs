//! # Training Impact Analysis
//!
//! Tests whether employees who attended training score higher on performance
//! reviews than those who did not.
//!
//! A run loads the dataset, drops incomplete rows, splits scores by attendance
//! and then reports, in order: group summaries, Shapiro-Wilk normality,
//! Levene variance homogeneity, a one-tailed Welch t-test, Cohen's d and a
//! plain-English conclusion. A boxplot of scores by attendance is written as
//! a PNG next to the report.
//!
//! ```no_run
//! use training_impact_analysis::{run, AnalysisConfig};
//!
//! let config = AnalysisConfig::default();
//! let outcome = run(&config, &mut std::io::stdout().lock())?;
//! println!("{}", outcome.evaluation.conclusion);
//! # Ok::<(), training_impact_analysis::AnalysisError>(())
//! ```

pub mod analysis;
pub mod common;
pub mod config;
pub mod init;
pub mod parsing;
pub mod pipeline;
pub mod report;

use thiserror::Error;

pub use analysis::StatsError;
pub use common::PlotError;
pub use config::AnalysisConfig;
pub use init::{initialize, Capabilities, InitError};
pub use parsing::ParsingError;
pub use pipeline::{evaluate_groups, run, AnalysisOutcome, Evaluation};
pub use report::Conclusion;

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Initialization error: {0}")]
    Init(#[from] InitError),

    #[error("Parsing error: {0}")]
    Parsing(#[from] ParsingError),

    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    #[error("Plot error: {0}")]
    Plot(#[from] PlotError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, AnalysisError>;
