//! Chart rendering for explanation analytics
//!
//! Renders onto a caller-owned `plotters` drawing area; there is no
//! process-wide plotting state. Two charts are provided:
//! - [`render_feature_histogram`] - per-model feature change frequency
//! - [`render_group_burden`] - group fairness burden with error bars

mod burden;
mod histogram;

pub use burden::{render_group_burden, render_group_burden_with_style};
pub use histogram::{render_feature_histogram, render_feature_histogram_with_style};

use crate::error::FairsightError;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::style::RGBColor;

/// Fixed five-color palette used for per-row series colors
pub const DEFAULT_PALETTE: [RGBColor; 5] = [
    RGBColor(31, 119, 180),  // blue
    RGBColor(255, 127, 14),  // orange
    RGBColor(44, 160, 44),   // green
    RGBColor(214, 39, 40),   // red
    RGBColor(227, 119, 194), // pink
];

/// Styling knobs shared by both chart renderers
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Width of one bar in group-axis units
    pub bar_width: f64,
    /// Half-width of error-bar caps in group-axis units
    pub error_cap_width: f64,
    /// Pixel gap between histogram bars
    pub bar_gap: u32,
    /// Title font size
    pub title_font_size: i32,
    /// Tick and legend label font size
    pub label_font_size: i32,
    /// Per-row series colors; rows past the end wrap around
    pub palette: Vec<RGBColor>,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_width: 0.4,
            error_cap_width: 0.06,
            bar_gap: 3,
            title_font_size: 20,
            label_font_size: 12,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl ChartStyle {
    /// Set the bar width (group-axis units)
    pub fn with_bar_width(mut self, width: f64) -> Self {
        self.bar_width = width.max(0.05);
        self
    }

    /// Set the error-bar cap half-width (group-axis units)
    pub fn with_error_cap_width(mut self, width: f64) -> Self {
        self.error_cap_width = width.max(0.0);
        self
    }

    /// Set the title font size
    pub fn with_title_font_size(mut self, size: i32) -> Self {
        self.title_font_size = size.max(6);
        self
    }

    /// Set the tick/legend label font size
    pub fn with_label_font_size(mut self, size: i32) -> Self {
        self.label_font_size = size.max(6);
        self
    }

    /// Replace the palette; an empty palette is ignored
    pub fn with_palette(mut self, palette: Vec<RGBColor>) -> Self {
        if !palette.is_empty() {
            self.palette = palette;
        }
        self
    }

    /// Color for a row index, wrapping past the palette end
    pub fn color_for(&self, row: usize) -> RGBColor {
        self.palette[row % self.palette.len()]
    }
}

/// Map a plotting-backend failure into the crate error
pub(crate) fn render_err<E>(err: DrawingAreaErrorKind<E>) -> FairsightError
where
    E: std::error::Error + Send + Sync,
{
    FairsightError::Render(err.to_string())
}
