mod explicit;
mod implicit;

use std::{fmt, str::FromStr};

use thiserror::Error;

use odebox_core::{Rhs, ScalarEquation};

use crate::equation::newton::{self, Config};

use super::grid::Node;

/// The single-step update rules an [`Integrator`](super::Integrator) can apply.
///
/// Explicit schemes compute `y[k+1]` directly from known values. Implicit
/// schemes solve a nonlinear equation for `y[k+1]` at every node and require
/// the derivative `f_y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scheme {
    /// `y[k+1] = y[k] + h·f(x[k], y[k])`.
    ExplicitEuler,

    /// Classical fourth-order Runge-Kutta.
    Rk4,

    /// Backward Euler, solved with Newton's method.
    ImplicitEuler,

    /// Trapezoidal rule, solved with Newton's method.
    ImplicitTrapezoid,

    /// Implicit midpoint rule, solved with Newton's method.
    ImplicitMidpoint,
}

impl Scheme {
    /// Every scheme, in declaration order.
    pub const ALL: [Scheme; 5] = [
        Scheme::ExplicitEuler,
        Scheme::Rk4,
        Scheme::ImplicitEuler,
        Scheme::ImplicitTrapezoid,
        Scheme::ImplicitMidpoint,
    ];

    /// The short names accepted by [`FromStr`], in the same order as [`Scheme::ALL`].
    pub const NAMES: [&'static str; 5] = ["explE", "RK4", "implE", "implTrap", "implMid"];

    /// Returns the short name used to select this scheme.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Scheme::ExplicitEuler => "explE",
            Scheme::Rk4 => "RK4",
            Scheme::ImplicitEuler => "implE",
            Scheme::ImplicitTrapezoid => "implTrap",
            Scheme::ImplicitMidpoint => "implMid",
        }
    }

    /// Returns true if the scheme needs a root solve (and therefore `f_y`).
    #[must_use]
    pub fn is_implicit(self) -> bool {
        matches!(
            self,
            Scheme::ImplicitEuler | Scheme::ImplicitTrapezoid | Scheme::ImplicitMidpoint
        )
    }

    /// Computes the value at `node.x_next` from `node`.
    pub(super) fn advance<F, D>(
        self,
        node: Node,
        rhs: &F,
        derivative: Option<&D>,
        config: &Config,
    ) -> Result<Advance, StepError>
    where
        F: Rhs,
        D: Rhs,
    {
        match self {
            Scheme::ExplicitEuler => Ok(Advance::Explicit(explicit::euler(rhs, node))),
            Scheme::Rk4 => Ok(Advance::Explicit(explicit::rk4(rhs, node))),
            Scheme::ImplicitEuler => {
                let derivative = derivative.ok_or(StepError::MissingDerivative)?;
                let equation = implicit::BackwardEuler::new(rhs, derivative, node);
                solve_implicit(&equation, node, config)
            }
            Scheme::ImplicitTrapezoid => {
                let derivative = derivative.ok_or(StepError::MissingDerivative)?;
                let equation = implicit::Trapezoid::new(rhs, derivative, node);
                solve_implicit(&equation, node, config)
            }
            Scheme::ImplicitMidpoint => {
                let derivative = derivative.ok_or(StepError::MissingDerivative)?;
                let equation = implicit::Midpoint::new(rhs, derivative, node);
                solve_implicit(&equation, node, config)
            }
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Scheme::ExplicitEuler => "expl.E",
            Scheme::Rk4 => "RK4",
            Scheme::ImplicitEuler => "impl.E",
            Scheme::ImplicitTrapezoid => "impl.Trap",
            Scheme::ImplicitMidpoint => "impl.Mid",
        };
        f.pad(label)
    }
}

/// Solves an implicit step seeded with the current value `y[k]`.
fn solve_implicit<E: ScalarEquation>(
    equation: &E,
    node: Node,
    config: &Config,
) -> Result<Advance, StepError> {
    newton::solve_unobserved(equation, node.y, config)
        .map(Advance::Implicit)
        .map_err(StepError::Newton)
}

/// Error returned when a scheme name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown scheme `{name}`, expected one of: {}", Scheme::NAMES.join(", "))]
pub struct ParseSchemeError {
    pub name: String,
}

impl FromStr for Scheme {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| ParseSchemeError { name: s.to_owned() })
    }
}

/// The outcome of a single step.
#[derive(Debug, Clone, Copy)]
pub(super) enum Advance {
    Explicit(f64),
    Implicit(newton::Solution),
}

/// Step failures, before they are tagged with the run and point index.
#[derive(Debug)]
pub(super) enum StepError {
    MissingDerivative,
    Newton(newton::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::equation::newton::Status;

    fn node(x: f64, y: f64, h: f64) -> Node {
        Node {
            x,
            y,
            x_next: x + h,
            h,
        }
    }

    fn value(advance: Advance) -> f64 {
        match advance {
            Advance::Explicit(y) => y,
            Advance::Implicit(solution) => {
                assert_eq!(solution.status, Status::Converged);
                solution.y
            }
        }
    }

    fn step(scheme: Scheme, node: Node, rhs: impl Rhs, derivative: impl Rhs) -> f64 {
        let advance = scheme
            .advance(node, &rhs, Some(&derivative), &Config::default())
            .expect("step should succeed");
        value(advance)
    }

    #[test]
    fn parses_every_short_name() {
        for (scheme, name) in Scheme::ALL.into_iter().zip(Scheme::NAMES) {
            assert_eq!(name.parse::<Scheme>(), Ok(scheme));
            assert_eq!(scheme.name(), name);
        }
    }

    #[test]
    fn unknown_name_lists_valid_choices() {
        let err = "RK45".parse::<Scheme>().expect_err("not a scheme");
        assert_eq!(err.name, "RK45");
        assert_eq!(
            err.to_string(),
            "unknown scheme `RK45`, expected one of: explE, RK4, implE, implTrap, implMid"
        );
    }

    #[test]
    fn only_implicit_schemes_need_a_derivative() {
        let implicit: Vec<_> = Scheme::ALL.into_iter().filter(|s| s.is_implicit()).collect();
        assert_eq!(
            implicit,
            vec![
                Scheme::ImplicitEuler,
                Scheme::ImplicitTrapezoid,
                Scheme::ImplicitMidpoint
            ]
        );
    }

    #[test]
    fn explicit_euler_single_step() {
        let y = step(
            Scheme::ExplicitEuler,
            node(0.0, 1.0, 0.1),
            |_x: f64, y: f64| y,
            |_x: f64, _y: f64| 1.0,
        );
        assert_relative_eq!(y, 1.1);
    }

    #[test]
    fn rk4_single_step_matches_taylor_polynomial() {
        // For y' = y, one RK4 step is the degree-4 Taylor polynomial of e^h.
        let h: f64 = 0.1;
        let y = step(
            Scheme::Rk4,
            node(0.0, 1.0, h),
            |_x: f64, y: f64| y,
            |_x: f64, _y: f64| 1.0,
        );
        let taylor = 1.0 + h + h.powi(2) / 2.0 + h.powi(3) / 6.0 + h.powi(4) / 24.0;
        assert_relative_eq!(y, taylor, epsilon = 1e-15);
    }

    #[test]
    fn implicit_euler_single_step_on_linear_problem() {
        // y1 = y0 + h·y1  ⇒  y1 = y0 / (1 - h)
        let y = step(
            Scheme::ImplicitEuler,
            node(0.0, 1.0, 0.1),
            |_x: f64, y: f64| y,
            |_x: f64, _y: f64| 1.0,
        );
        assert_relative_eq!(y, 1.0 / 0.9, epsilon = 1e-10);
    }

    #[test]
    fn trapezoid_single_step_on_linear_problem() {
        // y1 = y0 + h/2·(y0 + y1)  ⇒  y1 = (1 + h/2) / (1 - h/2)
        let y = step(
            Scheme::ImplicitTrapezoid,
            node(0.0, 1.0, 0.1),
            |_x: f64, y: f64| y,
            |_x: f64, _y: f64| 1.0,
        );
        assert_relative_eq!(y, 1.05 / 0.95, epsilon = 1e-10);
    }

    #[test]
    fn midpoint_single_step_on_linear_problem() {
        // y1 = y0 + h·(y0 + y1)/2 coincides with the trapezoid for y' = y.
        let y = step(
            Scheme::ImplicitMidpoint,
            node(0.0, 1.0, 0.1),
            |_x: f64, y: f64| y,
            |_x: f64, _y: f64| 1.0,
        );
        assert_relative_eq!(y, 1.05 / 0.95, epsilon = 1e-10);
    }

    #[test]
    fn implicit_scheme_without_derivative_is_rejected() {
        let result = Scheme::ImplicitEuler.advance(
            node(0.0, 1.0, 0.1),
            &|_x: f64, y: f64| y,
            None::<&fn(f64, f64) -> f64>,
            &Config::default(),
        );
        assert!(matches!(result, Err(StepError::MissingDerivative)));
    }

    #[test]
    fn explicit_scheme_ignores_missing_derivative() {
        let result = Scheme::Rk4.advance(
            node(0.0, 1.0, 0.1),
            &|_x: f64, y: f64| y,
            None::<&fn(f64, f64) -> f64>,
            &Config::default(),
        );
        assert!(matches!(result, Ok(Advance::Explicit(_))));
    }
}
