//! Rendering of stored trajectories and direction fields.
//!
//! See [`TrajectoryPlot`] for usage.

use eframe::egui::{self, Color32};
use egui_plot::{Arrows, Legend, Line, Plot, PlotPoints};
use thiserror::Error;

use odebox_core::{Interval, Rhs};
use odebox_solvers::{
    field::{self, Region},
    transient::TrajectoryStore,
};

/// Line colors, assigned to trajectories by insertion index.
const PALETTE: [Color32; 6] = [
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(0, 0, 255),
    Color32::from_rgb(0, 128, 0),
    Color32::from_rgb(255, 215, 0),
    Color32::from_rgb(255, 140, 0),
    Color32::from_rgb(0, 255, 255),
];

/// Direction arrows are drawn this fraction of a mesh cell long.
const ARROW_SCALE: f64 = 0.8;

/// Configuration for rendering a [`TrajectoryPlot`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// plot.show(ShowConfig::new().title("y' = y").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trajectory by scheme and resolution.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when preparing or showing a plot.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("there are no trajectories to show")]
    NoTrajectories,

    #[error("failed to sample direction field: {0}")]
    Field(#[from] field::Error),

    #[error("failed to open plot window: {0}")]
    Window(#[from] eframe::Error),
}

/// A snapshot of stored trajectories, ready to display in an egui window.
///
/// Each trajectory becomes a labeled line, colored by its position in the
/// store. A direction field can be overlaid with
/// [`directions`](TrajectoryPlot::directions).
///
/// # Example
///
/// ```ignore
/// integrator.run(10, Scheme::ExplicitEuler)?;
/// integrator.run(10, Scheme::Rk4)?;
///
/// TrajectoryPlot::new(integrator.trajectories())?
///     .directions(integrator.problem().rhs(), integrator.problem().interval(), &field::Config::default())?
///     .show(ShowConfig::new().title("y' = y").legend())?;
/// ```
pub struct TrajectoryPlot {
    lines: Vec<Trace>,
    arrows: Vec<([f64; 2], [f64; 2])>,
    y_range: (f64, f64),
}

struct Trace {
    label: String,
    color: Color32,
    points: Vec<[f64; 2]>,
}

impl TrajectoryPlot {
    /// Collects every trajectory in `store`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::NoTrajectories`] if the store is empty.
    pub fn new(store: &TrajectoryStore) -> Result<Self, PlotError> {
        let y_range = store.y_range().ok_or(PlotError::NoTrajectories)?;

        let lines = store
            .iter()
            .enumerate()
            .map(|(index, trajectory)| Trace {
                label: trajectory.label(),
                color: color_for(index),
                points: trajectory.points().map(|(x, y)| [x, y]).collect(),
            })
            .collect();

        Ok(Self {
            lines,
            arrows: Vec::new(),
            y_range,
        })
    }

    /// Overlays the direction field of `rhs` over `interval` and the y-range
    /// of the collected trajectories.
    ///
    /// # Errors
    ///
    /// Returns an error if the field cannot be sampled.
    pub fn directions<F: Rhs>(
        mut self,
        rhs: &F,
        interval: Interval,
        config: &field::Config,
    ) -> Result<Self, PlotError> {
        let (y_min, y_max) = self.y_range;
        let region = Region::new(interval.start(), interval.end(), y_min, y_max)?;
        let directions = field::direction_field(rhs, region, config)?;

        let length = arrow_length(region, config);
        self.arrows = directions
            .into_iter()
            .map(|d| ([d.x, d.y], [d.x + length * d.dx, d.y + length * d.dy]))
            .collect();

        Ok(self)
    }

    /// Opens a blocking egui window displaying the plot.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), PlotError> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    plot: self,
                    legend: config.legend,
                }))
            }),
        )?;
        Ok(())
    }
}

fn color_for(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

/// Returns the arrow length: a fraction of the smaller non-degenerate cell side.
#[allow(clippy::cast_precision_loss)]
fn arrow_length(region: Region, config: &field::Config) -> f64 {
    let [x0, x1] = region.x();
    let [y0, y1] = region.y();
    let cell_x = (x1 - x0) / (config.nx - 1) as f64;
    let cell_y = (y1 - y0) / (config.ny - 1) as f64;
    let cell = if cell_y > 0.0 { cell_x.min(cell_y) } else { cell_x };
    ARROW_SCALE * cell
}

/// The egui [`eframe::App`] that renders a [`TrajectoryPlot`].
struct PlotApp {
    plot: TrajectoryPlot,
    legend: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("trajectory_plot").x_axis_label("x").y_axis_label("y");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                if !self.plot.arrows.is_empty() {
                    let origins: PlotPoints = self.plot.arrows.iter().map(|a| a.0).collect();
                    let tips: PlotPoints = self.plot.arrows.iter().map(|a| a.1).collect();
                    plot_ui.arrows(Arrows::new(origins, tips).color(Color32::GRAY));
                }
                for trace in &self.plot.lines {
                    let points: PlotPoints = trace.points.iter().copied().collect();
                    plot_ui.line(Line::new(points).name(&trace.label).color(trace.color));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use odebox_core::Problem;
    use odebox_solvers::transient::{Integrator, Scheme};

    fn integrator() -> Integrator<impl Fn(f64, f64) -> f64> {
        let problem = Problem::new(0.0, 1.0, 1.0, |_x: f64, y: f64| y).expect("valid problem");
        Integrator::new(problem)
    }

    #[test]
    fn empty_store_is_reported() {
        let integrator = integrator();
        let result = TrajectoryPlot::new(integrator.trajectories());
        assert!(matches!(result, Err(PlotError::NoTrajectories)));
    }

    #[test]
    fn lines_follow_insertion_order_with_distinct_colors() {
        let mut integrator = integrator();
        integrator.run(5, Scheme::ExplicitEuler).expect("run");
        integrator.run(5, Scheme::Rk4).expect("run");

        let plot = TrajectoryPlot::new(integrator.trajectories()).expect("non-empty");

        let labels: Vec<_> = plot.lines.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["expl.E, n=5", "RK4, n=5"]);
        assert_ne!(plot.lines[0].color, plot.lines[1].color);
        assert_eq!(plot.lines[1].points.len(), 5);
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(color_for(0), color_for(PALETTE.len()));
        assert_ne!(color_for(0), color_for(1));
    }

    #[test]
    fn direction_overlay_spans_interval_and_trajectory_range() {
        let mut integrator = integrator();
        integrator.run(5, Scheme::Rk4).expect("run");

        let config = field::Config { nx: 4, ny: 3 };
        let plot = TrajectoryPlot::new(integrator.trajectories())
            .expect("non-empty")
            .directions(integrator.problem().rhs(), integrator.problem().interval(), &config)
            .expect("field");

        assert_eq!(plot.arrows.len(), 12);
        let (y_min, y_max) = plot.y_range;
        let first = plot.arrows[0].0;
        let last = plot.arrows[11].0;
        assert_relative_eq!(first[0], 0.0);
        assert_relative_eq!(first[1], y_min);
        assert_relative_eq!(last[0], 1.0);
        assert_relative_eq!(last[1], y_max);
    }
}
