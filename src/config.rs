//! Run configuration
//!
//! Input and output locations default to the project root (the crate's
//! manifest directory): the dataset is read from
//! `<root>/Employee_Training_and_Performance_Dataset.csv` and the plot is
//! written to `<root>/reports/performance_boxplot.png`.

use crate::analysis::constants::{DATASET_FILE_NAME, PLOT_FILE_NAME, REPORTS_DIR_NAME};
use crate::analysis::VariancePolicy;
use std::path::{Path, PathBuf};

/// Where to read the dataset, where to write the report, and which
/// mean-difference test to run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub variance_policy: VariancePolicy,
}

impl AnalysisConfig {
    /// Default file layout rooted at `base_dir`
    pub fn with_base_dir(base_dir: &Path) -> Self {
        Self {
            input_path: base_dir.join(DATASET_FILE_NAME),
            output_dir: base_dir.join(REPORTS_DIR_NAME),
            variance_policy: VariancePolicy::default(),
        }
    }

    /// Replaces the input path when one is given
    pub fn input_path(mut self, input_path: Option<PathBuf>) -> Self {
        if let Some(input_path) = input_path {
            self.input_path = input_path;
        }
        self
    }

    /// Replaces the output directory when one is given
    pub fn output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        if let Some(output_dir) = output_dir {
            self.output_dir = output_dir;
        }
        self
    }

    pub fn variance_policy(mut self, variance_policy: VariancePolicy) -> Self {
        self.variance_policy = variance_policy;
        self
    }

    /// Path the boxplot will be written to
    pub fn plot_path(&self) -> PathBuf {
        self.output_dir.join(PLOT_FILE_NAME)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::with_base_dir(Path::new(env!("CARGO_MANIFEST_DIR")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_dir_layout() {
        let config = AnalysisConfig::with_base_dir(Path::new("/data/project"));

        assert_eq!(
            config.input_path,
            Path::new("/data/project/Employee_Training_and_Performance_Dataset.csv")
        );
        assert_eq!(config.output_dir, Path::new("/data/project/reports"));
        assert_eq!(
            config.plot_path(),
            Path::new("/data/project/reports/performance_boxplot.png")
        );
        assert_eq!(config.variance_policy, VariancePolicy::AlwaysUnequal);
    }

    #[test]
    fn default_is_rooted_at_manifest_dir() {
        let config = AnalysisConfig::default();
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));

        assert_eq!(config.input_path, root.join(DATASET_FILE_NAME));
        assert_eq!(config.output_dir, root.join(REPORTS_DIR_NAME));
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let config = AnalysisConfig::with_base_dir(Path::new("/root"))
            .input_path(Some(PathBuf::from("/tmp/in.csv")))
            .output_dir(None)
            .variance_policy(VariancePolicy::FollowHomogeneityTest { alpha: 0.05 });

        assert_eq!(config.input_path, Path::new("/tmp/in.csv"));
        assert_eq!(config.output_dir, Path::new("/root/reports"));
        assert_eq!(
            config.variance_policy,
            VariancePolicy::FollowHomogeneityTest { alpha: 0.05 }
        );
    }
}
