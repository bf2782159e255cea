//! Plotting infrastructure for box-and-whisker charts
//!
//! This module provides functionality to render the performance boxplot
//! using the [`plotters`] crate. Charts are saved as PNG files at a fixed
//! 6x5 inch, 200 DPI resolution (1200x1000 pixels).

use crate::analysis::constants::{
    PLOT_FILE_NAME, PLOT_HEIGHT_PX, PLOT_TITLE, PLOT_WIDTH_PX, PLOT_X_LABEL, PLOT_Y_LABEL,
};
use crate::analysis::descriptive::{percentile_of_sorted, sorted_copy};
use crate::common::CleanObservation;
use crate::init::PLOT_FONT_FAMILY;
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Half the width of a box, in category units
const BOX_HALF_WIDTH: f64 = 0.25;

/// Half the width of a whisker cap, in category units
const CAP_HALF_WIDTH: f64 = 0.125;

/// Whiskers reach the furthest point within this many IQRs of the box
const WHISKER_IQR_FACTOR: f64 = 1.5;

/// Radius of an outlier marker, in pixels
const OUTLIER_RADIUS: i32 = 7;

const BOX_COLOR: RGBColor = RGBColor(31, 119, 180);
const MEDIAN_COLOR: RGBColor = RGBColor(44, 160, 44);

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Five-number summary and outliers of one box
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub label: String,
    pub lower_quartile: f64,
    pub median: f64,
    pub upper_quartile: f64,
    /// Smallest value within 1.5 IQR below the lower quartile
    pub lower_whisker: f64,
    /// Largest value within 1.5 IQR above the upper quartile
    pub upper_whisker: f64,
    /// Values beyond either whisker, ascending
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Computes box statistics for one group
    ///
    /// Quartiles use linear interpolation between closest ranks.
    pub fn new(label: &str, values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(PlotError::InvalidData(format!(
                "Group '{}' has no values to plot",
                label
            )));
        }

        let sorted = sorted_copy(values);
        let lower_quartile = percentile_of_sorted(&sorted, 25.0);
        let median = percentile_of_sorted(&sorted, 50.0);
        let upper_quartile = percentile_of_sorted(&sorted, 75.0);

        let reach = WHISKER_IQR_FACTOR * (upper_quartile - lower_quartile);
        let (low_fence, high_fence) = (lower_quartile - reach, upper_quartile + reach);

        let (inside, outliers): (Vec<f64>, Vec<f64>) = sorted
            .iter()
            .partition(|value| (low_fence..=high_fence).contains(*value));
        let lower_whisker = inside.first().copied().unwrap_or(lower_quartile);
        let upper_whisker = inside.last().copied().unwrap_or(upper_quartile);

        Ok(Self {
            label: label.to_string(),
            lower_quartile,
            median,
            upper_quartile,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }
}

/// Groups scores by every distinct attendance value, sorted by label
pub fn group_scores_by_label(rows: &[CleanObservation]) -> BTreeMap<String, Vec<f64>> {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for row in rows {
        groups
            .entry(row.attendance.clone())
            .or_default()
            .push(row.score);
    }

    groups
}

/// Renders the performance boxplot and saves it to `output_dir`
///
/// Creates `output_dir` if it does not exist and overwrites any existing
/// plot file.
///
/// # Arguments
/// * `rows` - Cleaned rows; one box is drawn per distinct attendance value
/// * `output_dir` - Directory where the PNG file should be saved
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written PNG file
/// * `Err(PlotError)` - If there is nothing to plot or rendering failed
pub fn create_performance_boxplot(rows: &[CleanObservation], output_dir: &Path) -> Result<PathBuf> {
    let boxes = group_scores_by_label(rows)
        .iter()
        .map(|(label, values)| BoxStats::new(label, values))
        .collect::<Result<Vec<_>>>()?;

    if boxes.is_empty() {
        return Err(PlotError::InvalidData(
            "No rows left to plot after cleaning".to_string(),
        ));
    }

    fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(PLOT_FILE_NAME);
    render_boxplot(&boxes, &output_path)?;

    Ok(output_path)
}

/// Draws one box per entry of `boxes`, left to right
///
/// Uses a numeric X-axis with category `i` centered at `i + 1`; tick labels
/// are replaced with the category names.
fn render_boxplot(boxes: &[BoxStats], output_path: &Path) -> Result<()> {
    let root = BitMapBackend::new(output_path, (PLOT_WIDTH_PX, PLOT_HEIGHT_PX));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let (y_min, y_max) = value_range(boxes);
    let x_range = 0.5..(boxes.len() as f64 + 0.5);
    let labels: Vec<String> = boxes.iter().map(|b| b.label.clone()).collect();

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(PLOT_TITLE, (PLOT_FONT_FAMILY, 40))
        .margin(20)
        .x_label_area_size(80)
        .y_label_area_size(100)
        .build_cartesian_2d(x_range, y_min..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(boxes.len() + 1)
        .x_label_formatter(&|x| category_label(&labels, *x))
        .x_desc(PLOT_X_LABEL)
        .y_desc(PLOT_Y_LABEL)
        .label_style((PLOT_FONT_FAMILY, 28))
        .axis_desc_style((PLOT_FONT_FAMILY, 32))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let centers = (1..=boxes.len()).map(|position| position as f64);

    chart_context
        .draw_series(boxes.iter().zip(centers.clone()).map(|(stats, center)| {
            Rectangle::new(
                [
                    (center - BOX_HALF_WIDTH, stats.lower_quartile),
                    (center + BOX_HALF_WIDTH, stats.upper_quartile),
                ],
                BOX_COLOR.stroke_width(3),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart_context
        .draw_series(
            boxes
                .iter()
                .zip(centers.clone())
                .flat_map(|(stats, center)| whisker_paths(stats, center)),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart_context
        .draw_series(boxes.iter().zip(centers.clone()).map(|(stats, center)| {
            PathElement::new(
                vec![
                    (center - BOX_HALF_WIDTH, stats.median),
                    (center + BOX_HALF_WIDTH, stats.median),
                ],
                MEDIAN_COLOR.stroke_width(3),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart_context
        .draw_series(boxes.iter().zip(centers).flat_map(|(stats, center)| {
            stats
                .outliers
                .iter()
                .map(move |value| Circle::new((center, *value), OUTLIER_RADIUS, BLACK.stroke_width(2)))
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Ensure everything is properly rendered and saved
    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Whisker stems and caps for one box
fn whisker_paths(stats: &BoxStats, center: f64) -> Vec<PathElement<(f64, f64)>> {
    let style = BLACK.stroke_width(2);
    vec![
        PathElement::new(
            vec![(center, stats.lower_quartile), (center, stats.lower_whisker)],
            style,
        ),
        PathElement::new(
            vec![(center, stats.upper_quartile), (center, stats.upper_whisker)],
            style,
        ),
        PathElement::new(
            vec![
                (center - CAP_HALF_WIDTH, stats.lower_whisker),
                (center + CAP_HALF_WIDTH, stats.lower_whisker),
            ],
            style,
        ),
        PathElement::new(
            vec![
                (center - CAP_HALF_WIDTH, stats.upper_whisker),
                (center + CAP_HALF_WIDTH, stats.upper_whisker),
            ],
            style,
        ),
    ]
}

/// Y-axis range covering every whisker and outlier, padded by 5%
fn value_range(boxes: &[BoxStats]) -> (f64, f64) {
    let values: Vec<f64> = boxes
        .iter()
        .flat_map(|b| {
            [b.lower_whisker, b.upper_whisker]
                .into_iter()
                .chain(b.outliers.iter().copied())
        })
        .collect();

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let padding = if max > min { (max - min) * 0.05 } else { 1.0 };
    (min - padding, max + padding)
}

/// Tick label for an X-axis position: the category name at integer
/// positions, blank elsewhere
fn category_label(labels: &[String], x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 1.0 {
        return String::new();
    }

    labels
        .get(rounded as usize - 1)
        .cloned()
        .unwrap_or_default()
}
