//! Common infrastructure modules shared across pipeline stages
//!
//! This module provides reusable infrastructure for:
//! - Data structures for rows, the loaded dataset and attendance groups
//! - ASCII table formatting of group summaries
//! - Plotting the performance boxplot

pub mod data_structures;
pub mod plots;
pub mod summary;

// Re-export commonly used items
pub use data_structures::{CleanObservation, Dataset, Groups, Observation};
pub use plots::PlotError;
