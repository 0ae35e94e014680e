//! Direction-field sampling for a right-hand side `f(x, y)`.
//!
//! At each point of a uniform mesh the ODE `y' = f(x, y)` prescribes the
//! direction `(1, f(x, y))`. Sampling that direction over a rectangle shows
//! the flow that every solution follows, independent of any initial value.

use thiserror::Error;

use odebox_core::Rhs;

/// A rectangular sampling region `[x_min, x_max] × [y_min, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    x: [f64; 2],
    y: [f64; 2],
}

impl Region {
    /// Creates a region, swapping any reversed range with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if any bound is non-finite.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, Error> {
        Ok(Self {
            x: ordered("x", x_min, x_max)?,
            y: ordered("y", y_min, y_max)?,
        })
    }

    /// Returns `[x_min, x_max]`.
    #[must_use]
    pub fn x(&self) -> [f64; 2] {
        self.x
    }

    /// Returns `[y_min, y_max]`.
    #[must_use]
    pub fn y(&self) -> [f64; 2] {
        self.y
    }
}

fn ordered(axis: &'static str, min: f64, max: f64) -> Result<[f64; 2], Error> {
    for value in [min, max] {
        if !value.is_finite() {
            return Err(Error::NonFiniteBound { axis, value });
        }
    }
    if min > max {
        log::warn!("{axis}_min ({min}) is greater than {axis}_max ({max}); the range was swapped");
        return Ok([max, min]);
    }
    Ok([min, max])
}

/// Mesh resolution for [`direction_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub nx: usize,
    pub ny: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { nx: 20, ny: 20 }
    }
}

/// A unit direction `(dx, dy)` anchored at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

/// Errors that can occur when sampling a direction field.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("{axis} bound is not finite: {value}")]
    NonFiniteBound { axis: &'static str, value: f64 },

    #[error("need at least 2 points along {axis}, got {n}")]
    TooFewPoints { axis: &'static str, n: usize },

    #[error("slope is not finite at ({x}, {y})")]
    NonFiniteSlope { x: f64, y: f64 },
}

/// Samples the unit direction `(1, f)/‖(1, f)‖` on an `nx × ny` mesh.
///
/// Directions are returned row by row: `y` outer, `x` inner.
///
/// # Errors
///
/// Returns an error if either resolution is below 2 or if `f` is not finite
/// at a mesh point.
pub fn direction_field<F: Rhs>(
    rhs: &F,
    region: Region,
    config: &Config,
) -> Result<Vec<Direction>, Error> {
    if config.nx < 2 {
        return Err(Error::TooFewPoints {
            axis: "x",
            n: config.nx,
        });
    }
    if config.ny < 2 {
        return Err(Error::TooFewPoints {
            axis: "y",
            n: config.ny,
        });
    }

    let xs = linspace(region.x, config.nx);
    let ys = linspace(region.y, config.ny);

    let mut field = Vec::with_capacity(config.nx * config.ny);
    for &y in &ys {
        for &x in &xs {
            let slope = rhs.eval(x, y);
            if !slope.is_finite() {
                return Err(Error::NonFiniteSlope { x, y });
            }
            let length = slope.hypot(1.0);
            field.push(Direction {
                x,
                y,
                dx: 1.0 / length,
                dy: slope / length,
            });
        }
    }

    Ok(field)
}

#[allow(clippy::cast_precision_loss)]
fn linspace([start, end]: [f64; 2], n: usize) -> Vec<f64> {
    let last = n - 1;
    let step = (end - start) / last as f64;
    (0..n)
        .map(|i| if i == last { end } else { start + i as f64 * step })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn zero_slope_points_along_x() {
        let region = Region::new(0.0, 1.0, 0.0, 1.0).expect("valid region");
        let field = direction_field(&|_x: f64, _y: f64| 0.0, region, &Config { nx: 3, ny: 2 })
            .expect("should sample");

        assert_eq!(field.len(), 6);
        for direction in &field {
            assert_relative_eq!(direction.dx, 1.0);
            assert_relative_eq!(direction.dy, 0.0);
        }
    }

    #[test]
    fn directions_have_unit_length() {
        let region = Region::new(-2.0, 2.0, -1.0, 3.0).expect("valid region");
        let field = direction_field(&|x: f64, y: f64| x * y, region, &Config::default())
            .expect("should sample");

        assert_eq!(field.len(), 400);
        for d in &field {
            assert_relative_eq!(d.dx.hypot(d.dy), 1.0, epsilon = 1e-12);
            assert_relative_eq!(d.dy / d.dx, d.x * d.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn mesh_is_row_major_and_spans_region() {
        let region = Region::new(0.0, 2.0, 10.0, 11.0).expect("valid region");
        let field = direction_field(&|_x: f64, _y: f64| 1.0, region, &Config { nx: 3, ny: 2 })
            .expect("should sample");

        let anchors: Vec<_> = field.iter().map(|d| (d.x, d.y)).collect();
        assert_eq!(
            anchors,
            vec![
                (0.0, 10.0),
                (1.0, 10.0),
                (2.0, 10.0),
                (0.0, 11.0),
                (1.0, 11.0),
                (2.0, 11.0)
            ]
        );
    }

    #[test]
    fn region_swaps_reversed_ranges() {
        let region = Region::new(3.0, 1.0, 5.0, -5.0).expect("valid region");
        assert_eq!(region.x(), [1.0, 3.0]);
        assert_eq!(region.y(), [-5.0, 5.0]);
    }

    #[test]
    fn rejects_coarse_mesh_and_bad_slopes() {
        let region = Region::new(0.0, 1.0, 0.0, 1.0).expect("valid region");

        let result = direction_field(&|_x: f64, _y: f64| 0.0, region, &Config { nx: 1, ny: 5 });
        assert_eq!(result, Err(Error::TooFewPoints { axis: "x", n: 1 }));

        let result = direction_field(&|x: f64, _y: f64| 1.0 / x, region, &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteSlope { .. })));
    }

    #[test]
    fn region_rejects_non_finite_bounds() {
        let result = Region::new(0.0, f64::NAN, 0.0, 1.0);
        assert!(matches!(result, Err(Error::NonFiniteBound { axis: "x", .. })));
    }
}
