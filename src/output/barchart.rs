// Bar chart of shared-noun counts, one bar per concept list, highest first.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::palette::ColorScale;
use super::vector::{splice_labels, write_figure, RotatedLabel};
use crate::overlap::OverlapResult;

/// 10 x 6 inches at 100 dpi.
const CANVAS: (u32, u32) = (1000, 600);
/// Room under the plot for the tilted list names.
const X_LABEL_AREA: u32 = 170;
const LABEL_FONT_SIZE: u32 = 12;
/// Fraction of each unit slot a bar occupies.
const BAR_WIDTH: f64 = 0.8;

/// Render the bar chart and write it to `path`.
pub fn render_barchart(overlaps: &OverlapResult, path: &Path) -> Result<()> {
    let svg = draw_barchart(overlaps)?;
    write_figure(path, &svg)
        .with_context(|| format!("Failed to write bar chart: {}", path.display()))
}

/// Draw the bar chart as an SVG document.
///
/// Bars are ordered by count descending (ties keep configuration order) and
/// colored on the orange scale between the smallest and largest count. Each
/// bar carries its count just above it; list names sit under the bars,
/// rotated 45 degrees and right-aligned.
pub fn draw_barchart(overlaps: &OverlapResult) -> Result<String> {
    let ranked = overlaps.ranked();
    let counts: Vec<usize> = ranked.iter().map(|(count, _)| *count).collect();
    let scale = ColorScale::over(&counts);

    let max_count = counts.iter().copied().max().unwrap_or(0) as u32;
    let y_top = ((max_count as f64 * 1.1).ceil() as u32).max(1);
    let x_max = ranked.len().max(1) as f64;

    let mut svg = String::new();
    let mut labels = Vec::with_capacity(ranked.len());
    {
        let root = SVGBackend::with_string(&mut svg, CANVAS).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(50)
            .build_cartesian_2d(0.0f64..x_max, 0u32..y_top)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(0)
            .label_style(("sans-serif", 12))
            .draw()?;

        let margin = (1.0 - BAR_WIDTH) / 2.0;
        chart.draw_series(ranked.iter().enumerate().map(|(i, (count, _))| {
            let x = i as f64;
            Rectangle::new(
                [(x + margin, 0u32), (x + 1.0 - margin, *count as u32)],
                scale.color(*count as f64).filled(),
            )
        }))?;

        let count_style = TextStyle::from(("sans-serif", 10).into_font())
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(ranked.iter().enumerate().map(|(i, (count, _))| {
            Text::new(
                count.to_string(),
                (i as f64 + 0.5, *count as u32),
                count_style.clone(),
            )
        }))?;

        for (i, (_, name)) in ranked.iter().enumerate() {
            let (x, y) = chart.backend_coord(&(i as f64 + 0.5, 0u32));
            labels.push(RotatedLabel {
                text: name.to_string(),
                x,
                y: y + 8,
                angle: -45.0,
                font_size: LABEL_FONT_SIZE,
            });
        }

        root.present()?;
    }

    Ok(splice_labels(svg, &labels))
}
