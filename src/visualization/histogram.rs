//! Feature change-frequency histogram

use super::{render_err, ChartStyle};
use crate::error::{FairsightError, Result};
use crate::frequency::compute_feature_frequency;
use crate::report::ExplanationResult;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Render the feature change-frequency histogram for one model with
/// default styling.
pub fn render_feature_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    model_id: &str,
    result: &ExplanationResult,
) -> Result<()> {
    render_feature_histogram_with_style(area, model_id, result, &ChartStyle::default())
}

/// Render the feature change-frequency histogram for one model.
///
/// Bars are ordered by descending change count, ties keeping schema
/// order; tick labels are the reordered feature names, rotated for
/// readability. Draws onto the supplied area only.
pub fn render_feature_histogram_with_style<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    model_id: &str,
    result: &ExplanationResult,
    style: &ChartStyle,
) -> Result<()> {
    let freq = compute_feature_frequency(model_id, result)?;
    if freq.is_empty() {
        return Err(FairsightError::EmptyInput(format!(
            "model '{}' declares no features",
            model_id
        )));
    }

    let order = freq.sorted_order();
    let names: Vec<String> = order
        .iter()
        .map(|&idx| freq.feature_names[idx].clone())
        .collect();
    let num_features = freq.len();
    let y_max = freq
        .counts
        .iter()
        .copied()
        .fold(0.0f64, f64::max)
        .max(1.0)
        * 1.05;

    area.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("Model: {}", model_id),
            ("sans-serif", style.title_font_size),
        )
        .margin(10)
        .x_label_area_size(90)
        .y_label_area_size(50)
        .build_cartesian_2d((0u32..num_features as u32).into_segmented(), 0f64..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Frequency")
        .x_labels(num_features)
        .x_label_formatter(&|pos: &SegmentValue<u32>| match pos {
            SegmentValue::CenterOf(idx) => {
                names.get(*idx as usize).cloned().unwrap_or_default()
            }
            _ => String::new(),
        })
        .x_label_style(
            ("sans-serif", style.label_font_size)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .draw()
        .map_err(render_err)?;

    let color = style.color_for(0);
    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(color.filled())
                .margin(style.bar_gap)
                .data(
                    order
                        .iter()
                        .enumerate()
                        .map(|(pos, &idx)| (pos as u32, freq.counts[idx])),
                ),
        )
        .map_err(render_err)?;

    area.present().map_err(render_err)?;
    Ok(())
}
