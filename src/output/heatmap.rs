// Presence/absence heatmap: one row per concept list, one column per
// reference noun, two colors, and a two-step legend.
//
// The figure is laid out directly in pixel space. Cells are square, so the
// canvas grows with the matrix instead of squeezing cells into a fixed frame.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::palette::{ABSENT, PRESENT};
use super::vector::{splice_labels, write_figure, RotatedLabel};
use crate::overlap::HeatmapMatrix;

const CELL: i32 = 16;
const MARGIN: i32 = 20;
const FONT_SIZE: u32 = 11;
/// Rough advance of one label character at FONT_SIZE, used for layout only.
const CHAR_WIDTH: i32 = 7;
const LABEL_GAP: i32 = 6;
const LEGEND_GAP: i32 = 30;
const LEGEND_WIDTH: i32 = 18;
const LEGEND_MIN_HEIGHT: i32 = 60;
const LEGEND_LABEL_WIDTH: i32 = 70;

/// Render the heatmap and write it to `path`.
pub fn render_heatmap(matrix: &HeatmapMatrix, path: &Path) -> Result<()> {
    let svg = draw_heatmap(matrix)?;
    write_figure(path, &svg)
        .with_context(|| format!("Failed to write heatmap: {}", path.display()))
}

fn longest_label(labels: &[String]) -> i32 {
    labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32
}

/// Draw the heatmap as an SVG document. No title and no axis titles.
pub fn draw_heatmap(matrix: &HeatmapMatrix) -> Result<String> {
    let n_rows = matrix.rows().len() as i32;
    let n_cols = matrix.columns().len() as i32;

    let left = MARGIN + longest_label(matrix.rows()) * CHAR_WIDTH + LABEL_GAP;
    let top = MARGIN;
    let grid_w = n_cols * CELL;
    let grid_h = n_rows * CELL;
    let column_label_h = longest_label(matrix.columns()) * CHAR_WIDTH + LABEL_GAP;

    // The legend is a quarter of the grid height, like a shrunken colorbar.
    let legend_h = (grid_h / 4).max(LEGEND_MIN_HEIGHT);
    let legend_x = left + grid_w + LEGEND_GAP;

    let width = legend_x + LEGEND_WIDTH + LEGEND_LABEL_WIDTH + MARGIN;
    let height = top + grid_h.max(legend_h) + column_label_h + MARGIN;

    let mut svg = String::new();
    let mut labels = Vec::with_capacity(matrix.columns().len());
    {
        let root =
            SVGBackend::with_string(&mut svg, (width as u32, height as u32)).into_drawing_area();
        root.fill(&WHITE)?;

        let grid_line = WHITE.stroke_width(1);
        for row in 0..n_rows {
            for col in 0..n_cols {
                let x0 = left + col * CELL;
                let y0 = top + row * CELL;
                let color = if matrix.is_present(row as usize, col as usize) {
                    PRESENT
                } else {
                    ABSENT
                };
                let corners = [(x0, y0), (x0 + CELL, y0 + CELL)];
                root.draw(&Rectangle::new(corners, color.filled()))?;
                root.draw(&Rectangle::new(corners, grid_line))?;
            }
        }

        let row_style = TextStyle::from(("sans-serif", 11).into_font())
            .pos(Pos::new(HPos::Right, VPos::Center));
        for (row, name) in matrix.rows().iter().enumerate() {
            let y = top + row as i32 * CELL + CELL / 2;
            root.draw(&Text::new(name.as_str(), (left - LABEL_GAP, y), row_style.clone()))?;
        }

        for (col, gloss) in matrix.columns().iter().enumerate() {
            labels.push(RotatedLabel {
                text: gloss.clone(),
                x: left + col as i32 * CELL + CELL / 2,
                y: top + grid_h + LABEL_GAP,
                angle: -90.0,
                font_size: FONT_SIZE,
            });
        }

        draw_legend(&root, legend_x, top, legend_h)?;
        root.present()?;
    }

    Ok(splice_labels(svg, &labels))
}

/// Two-block legend bar: "Present" on top, "Absent" below, no numeric ticks.
fn draw_legend(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    x: i32,
    y: i32,
    height: i32,
) -> Result<()> {
    let half = height / 2;
    let label_style =
        TextStyle::from(("sans-serif", 11).into_font()).pos(Pos::new(HPos::Left, VPos::Center));

    for (block_y, color, label) in [(y, PRESENT, "Present"), (y + half, ABSENT, "Absent")] {
        area.draw(&Rectangle::new(
            [(x, block_y), (x + LEGEND_WIDTH, block_y + half)],
            color.filled(),
        ))?;
        area.draw(&Text::new(
            label,
            (x + LEGEND_WIDTH + LABEL_GAP, block_y + half / 2),
            label_style.clone(),
        ))?;
    }

    area.draw(&Rectangle::new(
        [(x, y), (x + LEGEND_WIDTH, y + 2 * half)],
        BLACK.mix(0.4).stroke_width(1),
    ))?;
    Ok(())
}
