use std::ops::Range;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Pads a trajectory bounding box and stretches one side so the chart keeps a
/// 2:1 distance-to-height aspect; returns the (x, y) spans.
pub fn fixed_ratio_axis_window(raw_span_x: f64, raw_span_y: f64) -> (f64, f64) {
    let raw_x_span = raw_span_x.max(1.0);
    let raw_y_span = raw_span_y.max(1.0);
    let x_pad = raw_x_span * X_PADDING_RATIO;
    let y_pad = raw_y_span * Y_PADDING_RATIO;

    let mut x_span = (raw_span_x + x_pad).max(1.0);
    let mut y_span = (raw_span_y + y_pad).max(1.0);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    (x_span, y_span)
}

/// Axis ranges covering every point plus the launch origin.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotWindow {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

impl PlotWindow {
    pub fn covering<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (min_x, max_x, min_y, max_y) = points.into_iter().fold(
            (0.0f64, 0.0f64, 0.0f64, 0.0f64),
            |(min_x, max_x, min_y, max_y), (x, y)| {
                (min_x.min(x), max_x.max(x), min_y.min(y), max_y.max(y))
            },
        );

        let (x_span, y_span) = fixed_ratio_axis_window(max_x - min_x, max_y - min_y);
        Self {
            x: min_x..(min_x + x_span),
            y: min_y..(min_y + y_span),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_data_sets_height_from_ratio() {
        let (x, y) = fixed_ratio_axis_window(100.0, 10.0);
        assert!((x - 106.0).abs() < 1e-9);
        assert!((y - 53.0).abs() < 1e-9);
    }

    #[test]
    fn tall_data_widens_x() {
        let (x, y) = fixed_ratio_axis_window(10.0, 100.0);
        assert!((y - 110.0).abs() < 1e-9);
        assert!((x - 220.0).abs() < 1e-9);
    }

    #[test]
    fn tiny_data_gets_unit_floor() {
        let (x, y) = fixed_ratio_axis_window(0.0, 0.0);
        assert_eq!((x, y), (2.0, 1.0));
    }

    #[test]
    fn window_includes_origin_and_backward_flights() {
        let window = PlotWindow::covering([(0.0, 0.0), (-20.0, 5.0), (-40.0, -0.2)]);
        assert_eq!(window.x.start, -40.0);
        assert_eq!(window.y.start, -0.2);
        assert!(window.x.end >= 0.0);
        assert!(window.y.end >= 5.0);
    }

    #[test]
    fn empty_input_is_unit_window_at_origin() {
        let window = PlotWindow::covering(std::iter::empty());
        assert_eq!(window.x, 0.0..2.0);
        assert_eq!(window.y, 0.0..1.0);
    }
}
