//! Fixed parameters of the training impact analysis
//!
//! Column names, group labels, statistical thresholds and plot geometry.
//! None of these are exposed on the command line.

/// Name of the dataset file expected in the project root
pub const DATASET_FILE_NAME: &str = "Employee_Training_and_Performance_Dataset.csv";

/// Directory (relative to the project root) that receives generated reports
pub const REPORTS_DIR_NAME: &str = "reports";

/// File name of the rendered boxplot
pub const PLOT_FILE_NAME: &str = "performance_boxplot.png";

/// Categorical column holding the training attendance indicator
pub const ATTENDANCE_COLUMN: &str = "TrainingAttended";

/// Numeric column holding the performance score
pub const SCORE_COLUMN: &str = "PerformanceScore";

/// Attendance value for employees who attended training
pub const TRAINED_LABEL: &str = "Yes";

/// Attendance value for employees who did not attend training
pub const UNTRAINED_LABEL: &str = "No";

/// Significance level for the one-tailed hypothesis test
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Upper bound on the number of values fed to the Shapiro-Wilk test per group
pub const NORMALITY_SAMPLE_CAP: usize = 300;

/// Seed for the normality subsample, so repeated runs print identical results
pub const SAMPLING_SEED: u64 = 1;

/// Smallest group size for which variance-based statistics are defined
pub const MIN_GROUP_SIZE: usize = 2;

/// Plot width in inches
pub const PLOT_WIDTH_INCHES: u32 = 6;

/// Plot height in inches
pub const PLOT_HEIGHT_INCHES: u32 = 5;

/// Plot resolution in dots per inch
pub const PLOT_DPI: u32 = 200;

/// Plot width in pixels (1200)
pub const PLOT_WIDTH_PX: u32 = PLOT_WIDTH_INCHES * PLOT_DPI;

/// Plot height in pixels (1000)
pub const PLOT_HEIGHT_PX: u32 = PLOT_HEIGHT_INCHES * PLOT_DPI;

/// Title drawn at the top of the boxplot
pub const PLOT_TITLE: &str = "Performance Score by Training Attendance";

/// X-axis label of the boxplot
pub const PLOT_X_LABEL: &str = "Training Attended";

/// Y-axis label of the boxplot
pub const PLOT_Y_LABEL: &str = "Performance Score";
