//! Startup checks
//!
//! Verifies that the plotting stack can rasterize text before any work is
//! done.

use plotters::style::{FontDesc, FontFamily, FontStyle};
use thiserror::Error;
use tracing::debug;

/// Font family used by every chart label
pub const PLOT_FONT_FAMILY: &str = "sans-serif";

/// Label size used for the probe, in pixels
const PROBE_FONT_SIZE: f64 = 28.0;

/// Errors that can occur during startup
#[derive(Error, Debug)]
pub enum InitError {
    #[error("No usable '{family}' font for plot text: {reason}")]
    FontUnavailable { family: &'static str, reason: String },
}

/// Capabilities confirmed at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    /// Pixel size of a probe string rendered in the plot font
    pub probe_text_size: (u32, u32),
}

/// Confirms the plot font can be loaded and measured
///
/// # Returns
/// * `Ok(Capabilities)` - If text can be laid out
/// * `Err(InitError)` - If the font backend cannot provide the font
pub fn initialize() -> Result<Capabilities, InitError> {
    let font = FontDesc::new(FontFamily::SansSerif, PROBE_FONT_SIZE, FontStyle::Normal);
    let probe_text_size = font
        .box_size("Performance Score")
        .map_err(|e| InitError::FontUnavailable {
            family: PLOT_FONT_FAMILY,
            reason: e.to_string(),
        })?;

    debug!(?probe_text_size, "plot font available");
    Ok(Capabilities { probe_text_size })
}
