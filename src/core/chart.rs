use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::core::ballistics::{FlightSummary, ProjectileFlight};
use crate::core::error::SimError;
use crate::core::report::Presenter;
use crate::core::units::UnitSystem;
use crate::core::window::PlotWindow;

pub const DEFAULT_CHART_PATH: &str = "projectile_motion.svg";
pub const CHART_SIZE: (u32, u32) = (1024, 640);
pub const CHART_TITLE: &str = "Projectile Motion";

pub type TrajectoryChart<'a, DB> =
    ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn chart_error<E: std::fmt::Display>(err: E) -> SimError {
    SimError::Chart(err.to_string())
}

pub fn series_label(summary: &FlightSummary) -> String {
    format!("Projectile {}", summary.projectile_index)
}

/// Title, labelled axes and one line series per projectile. The legend is left
/// to [`draw_legend`] since it is the only part that measures text with real fonts.
pub fn draw_trajectories<'a, DB: DrawingBackend>(
    root: &'a DrawingArea<DB, Shift>,
    units: UnitSystem,
    flights: &[ProjectileFlight],
) -> Result<TrajectoryChart<'a, DB>, SimError> {
    root.fill(&WHITE).map_err(chart_error)?;

    let window = PlotWindow::covering(flights.iter().flat_map(|f| f.trajectory.samples()));
    let len = units.length_unit();

    let mut chart = ChartBuilder::on(root)
        .caption(CHART_TITLE, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(window.x, window.y)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .x_desc(format!("Horizontal Distance ({len})"))
        .y_desc(format!("Vertical Distance ({len})"))
        .draw()
        .map_err(chart_error)?;

    for (i, flight) in flights.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(
                flight.trajectory.samples(),
                color.stroke_width(2),
            ))
            .map_err(chart_error)?
            .label(series_label(&flight.summary))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    Ok(chart)
}

pub fn draw_legend<'a, DB: DrawingBackend + 'a>(
    chart: &mut TrajectoryChart<'a, DB>,
) -> Result<(), SimError> {
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(chart_error)
}

/// Renders the run to an SVG file.
pub struct ChartPresenter {
    path: PathBuf,
    size: (u32, u32),
}

impl ChartPresenter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: CHART_SIZE,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Presenter for ChartPresenter {
    fn present(&mut self, units: UnitSystem, flights: &[ProjectileFlight]) -> Result<(), SimError> {
        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        let mut chart = draw_trajectories(&root, units, flights)?;
        draw_legend(&mut chart)?;
        drop(chart);
        root.present().map_err(chart_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use plotters_backend::{
        BackendColor, BackendCoord, BackendStyle, BackendTextStyle, DrawingErrorKind,
    };

    use super::*;
    use crate::core::ballistics::{LaunchParameters, simulate};

    #[derive(Default)]
    struct Drawn {
        texts: Vec<String>,
        path_lengths: Vec<usize>,
    }

    /// Keeps text and path calls; sizes text without touching any font.
    struct RecordingBackend {
        drawn: Rc<RefCell<Drawn>>,
    }

    impl DrawingBackend for RecordingBackend {
        type ErrorType = std::io::Error;

        fn get_size(&self) -> (u32, u32) {
            (800, 500)
        }

        fn ensure_prepared(&mut self) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
            Ok(())
        }

        fn present(&mut self) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
            Ok(())
        }

        fn draw_pixel(
            &mut self,
            _point: BackendCoord,
            _color: BackendColor,
        ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
            Ok(())
        }

        fn draw_path<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
            &mut self,
            path: I,
            _style: &S,
        ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
            let len = path.into_iter().count();
            self.drawn.borrow_mut().path_lengths.push(len);
            Ok(())
        }

        fn draw_text<S: BackendTextStyle>(
            &mut self,
            text: &str,
            _style: &S,
            _pos: BackendCoord,
        ) -> Result<(), DrawingErrorKind<Self::ErrorType>> {
            self.drawn.borrow_mut().texts.push(text.to_string());
            Ok(())
        }

        fn estimate_text_size<S: BackendTextStyle>(
            &self,
            text: &str,
            _style: &S,
        ) -> Result<(u32, u32), DrawingErrorKind<Self::ErrorType>> {
            Ok((text.len() as u32 * 7, 12))
        }
    }

    fn render(units: UnitSystem, flights: &[ProjectileFlight]) -> Drawn {
        let drawn = Rc::new(RefCell::new(Drawn::default()));
        let root = RecordingBackend {
            drawn: Rc::clone(&drawn),
        }
        .into_drawing_area();
        draw_trajectories(&root, units, flights).expect("drawing should succeed");
        drop(root);
        Rc::try_unwrap(drawn)
            .ok()
            .expect("backend released")
            .into_inner()
    }

    fn flights() -> Vec<ProjectileFlight> {
        simulate(&[
            LaunchParameters::new(10.0, 45.0, 9.8).expect("valid"),
            LaunchParameters::new(20.0, 30.0, 9.8).expect("valid"),
        ])
    }

    #[test]
    fn chart_has_title_and_unit_axis_labels() {
        let drawn = render(UnitSystem::Si, &flights());

        assert!(drawn.texts.iter().any(|t| t == CHART_TITLE));
        assert!(drawn.texts.iter().any(|t| t == "Horizontal Distance (m)"));
        assert!(drawn.texts.iter().any(|t| t == "Vertical Distance (m)"));

        let drawn = render(UnitSystem::Us, &flights());
        assert!(drawn.texts.iter().any(|t| t == "Horizontal Distance (ft)"));
    }

    #[test]
    fn one_line_per_projectile_with_every_sample() {
        let flights = flights();
        let drawn = render(UnitSystem::Si, &flights);

        for flight in &flights {
            let expected = flight.trajectory.sample_count();
            assert!(
                drawn.path_lengths.contains(&expected),
                "no path with {expected} points in {:?}",
                drawn.path_lengths
            );
        }
    }

    #[test]
    fn series_labels_follow_projectile_index() {
        let labels: Vec<String> = flights().iter().map(|f| series_label(&f.summary)).collect();
        assert_eq!(labels, vec!["Projectile 1", "Projectile 2"]);
    }
}
