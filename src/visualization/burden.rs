//! Grouped fairness-burden chart with asymmetric error bars

use super::{render_err, ChartStyle};
use crate::error::{FairsightError, Result};
use crate::fairness::{BurdenSeries, GroupBurdenTable};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/// Render the group fairness-burden comparison chart with default
/// styling.
pub fn render_group_burden<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    table: &GroupBurdenTable,
    group_categories: &[String],
    group_labels: &[String],
) -> Result<()> {
    render_group_burden_with_style(area, table, group_categories, group_labels, &ChartStyle::default())
}

/// Render the group fairness-burden comparison chart.
///
/// One cluster of bars per table row (model), offset horizontally by
/// `bar_width * row`, one bar per group within the cluster. Error bars
/// are asymmetric: `central - lower` downward and `upper - central`
/// upward, with horizontal caps. Group tick labels sit at
/// `group + bar_width`, one legend entry per row label.
pub fn render_group_burden_with_style<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    table: &GroupBurdenTable,
    group_categories: &[String],
    group_labels: &[String],
    style: &ChartStyle,
) -> Result<()> {
    let series: Vec<BurdenSeries> = group_categories
        .iter()
        .map(|group| table.burden_series(group))
        .collect::<Result<Vec<_>>>()?;

    let num_groups = series.len();
    let num_rows = table.len();
    if num_groups == 0 || num_rows == 0 {
        return Err(FairsightError::EmptyInput(
            "burden chart needs at least one table row and one group".to_string(),
        ));
    }

    let width = style.bar_width;
    let x_max = (num_groups - 1) as f64 + width * num_rows as f64 + width;

    let mut y_top = f64::MIN;
    let mut y_bottom = 0.0f64;
    for s in &series {
        for value in s.upper.iter().chain(s.central.iter()) {
            y_top = y_top.max(*value);
        }
        for value in s.lower.iter() {
            y_bottom = y_bottom.min(*value);
        }
    }
    y_top = y_top.max(1e-3);
    let y_pad = (y_top - y_bottom) * 0.1;

    area.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(area)
        .caption(
            "Feature fairness by model",
            ("sans-serif", style.title_font_size),
        )
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..x_max, y_bottom..(y_top + y_pad))
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("Group burden")
        .draw()
        .map_err(render_err)?;

    for (row, row_label) in table.labels().iter().enumerate() {
        let color = style.color_for(row);

        let bars: Vec<Rectangle<(f64, f64)>> = (0..num_groups)
            .map(|group| {
                let left = row as f64 * width + group as f64;
                let central = series[group].central[row];
                Rectangle::new([(left, 0.0), (left + width, central)], color.filled())
            })
            .collect();
        chart
            .draw_series(bars)
            .map_err(render_err)?
            .label(row_label.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled())
            });

        for (group, s) in series.iter().enumerate() {
            let center_x = width / 2.0 + row as f64 * width + group as f64;
            let central = s.central[row];
            let whisker_low = central - s.lower_errors()[row];
            let whisker_high = central + s.upper_errors()[row];
            let cap = style.error_cap_width;
            chart
                .draw_series([
                    PathElement::new(
                        vec![(center_x, whisker_low), (center_x, whisker_high)],
                        BLACK.stroke_width(1),
                    ),
                    PathElement::new(
                        vec![(center_x - cap, whisker_low), (center_x + cap, whisker_low)],
                        BLACK.stroke_width(1),
                    ),
                    PathElement::new(
                        vec![(center_x - cap, whisker_high), (center_x + cap, whisker_high)],
                        BLACK.stroke_width(1),
                    ),
                ])
                .map_err(render_err)?;
        }
    }

    // group tick labels, anchored just below the axis baseline
    let tick_style = TextStyle::from(("sans-serif", style.label_font_size).into_font())
        .pos(Pos::new(HPos::Center, VPos::Top));
    let plot_area = chart.plotting_area();
    for (group, label) in group_labels.iter().enumerate().take(num_groups) {
        plot_area
            .draw(&Text::new(
                label.clone(),
                (group as f64 + width, y_bottom),
                tick_style.clone(),
            ))
            .map_err(render_err)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    area.present().map_err(render_err)?;
    Ok(())
}
