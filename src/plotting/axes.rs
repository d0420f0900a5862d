use std::ops::Range;

/// Data ranges of a plot whose x and y axes share one scale.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotWindow {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

const PADDING_FRACTION: f64 = 0.05;

impl PlotWindow {
    /// Fits the finite points of `(xs, ys)` into a `width` x `height` pixel area.
    ///
    /// The shorter data extent is widened around its centre until both axes
    /// share one scale, so circles stay circles.
    pub fn fit(xs: &[f64], ys: &[f64], width: u32, height: u32) -> Self {
        let bounds = xs
            .iter()
            .zip(ys.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .fold(None, |acc: Option<(f64, f64, f64, f64)>, (&x, &y)| match acc {
                None => Some((x, x, y, y)),
                Some((x0, x1, y0, y1)) => Some((x0.min(x), x1.max(x), y0.min(y), y1.max(y))),
            });
        let (x_min, x_max, y_min, y_max) = bounds.unwrap_or((-1.0, 1.0, -1.0, 1.0));

        let (x_min, x_max) = padded(x_min, x_max);
        let (y_min, y_max) = padded(y_min, y_max);

        let (width, height) = (f64::from(width.max(1)), f64::from(height.max(1)));
        let units_per_px = ((x_max - x_min) / width).max((y_max - y_min) / height);

        PlotWindow {
            x: centred(x_min, x_max, width * units_per_px),
            y: centred(y_min, y_max, height * units_per_px),
        }
    }
}

fn padded(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span > 0.0 {
        (min - span * PADDING_FRACTION, max + span * PADDING_FRACTION)
    } else {
        let half = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
        (min - half, max + half)
    }
}

fn centred(min: f64, max: f64, span: f64) -> Range<f64> {
    let mid = 0.5 * (min + max);
    (mid - 0.5 * span)..(mid + 0.5 * span)
}
