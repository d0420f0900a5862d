pub mod axes;

pub use axes::PlotWindow;

use crate::errors::SimError;
use plotters::prelude::*;
use std::fmt::Display;
use std::path::Path;

const MARGIN: u32 = 20;
const LABEL_AREA: u32 = 60;

fn render_error<E: Display>(e: E) -> SimError {
    SimError::Render(e.to_string())
}

/// Splits `(xs, ys)` into runs of finite points, so a diverged tail leaves a gap
/// instead of a line to infinity.
fn finite_segments(xs: &[f64], ys: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = vec![Vec::new()];
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        if x.is_finite() && y.is_finite() {
            if let Some(current) = segments.last_mut() {
                current.push((x, y));
            }
        } else if segments.last().map_or(false, |s| !s.is_empty()) {
            segments.push(Vec::new());
        }
    }
    segments.retain(|s| !s.is_empty());
    segments
}

/// Renders one trajectory on a fresh bitmap and writes it to `path` as PNG.
///
/// Both axes share one scale; the title is drawn with a system TrueType font.
pub fn plot_trajectory<P: AsRef<Path>>(
    path: P,
    xs: &[f64],
    ys: &[f64],
    title: &str,
    width: u32,
    height: u32,
) -> Result<(), SimError> {
    let root = BitMapBackend::new(path.as_ref(), (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let area = root
        .titled(title, ("sans-serif", 30))
        .map_err(render_error)?;
    let (area_width, area_height) = area.dim_in_pixel();
    let window = PlotWindow::fit(
        xs,
        ys,
        area_width.saturating_sub(2 * MARGIN + LABEL_AREA),
        area_height.saturating_sub(2 * MARGIN + LABEL_AREA),
    );

    let mut chart = ChartBuilder::on(&area)
        .margin(MARGIN)
        .x_label_area_size(LABEL_AREA)
        .y_label_area_size(LABEL_AREA)
        .build_cartesian_2d(window.x, window.y)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .axis_desc_style(("sans-serif", 20))
        .draw()
        .map_err(render_error)?;

    for segment in finite_segments(xs, ys) {
        chart
            .draw_series(LineSeries::new(segment, BLUE.stroke_width(2)))
            .map_err(render_error)?;
    }

    root.present().map_err(render_error)
}
