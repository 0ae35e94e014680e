//! Newton-Raphson solver for scalar equations.
//!
//! Starting from an initial guess, the solver repeatedly applies
//!
//! ```text
//! y ← y - g(y) / g'(y)
//! ```
//!
//! until `|g(y)| < eps` or `iter_max` updates have been made.
//!
//! # Example
//!
//! ```
//! use odebox_solvers::equation::newton::{self, Config, Status};
//!
//! let equation = (|y: f64| y * y - 2.0, |y: f64| 2.0 * y);
//! let solution = newton::solve_unobserved(&equation, 1.0, &Config::default())?;
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.y - 2.0_f64.sqrt()).abs() < 1e-9);
//! # Ok::<(), newton::Error>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use odebox_core::{Observer, ScalarEquation};

/// Finds a root of `equation` with Newton's method.
///
/// # Algorithm
///
/// 1. If the guess already satisfies `|g(y)| < eps`, return it with zero
///    iterations.
/// 2. Otherwise, for up to `iter_max` iterations:
///    - Update `y ← y - g(y)/g'(y)`.
///    - Evaluate the residual at the new iterate.
///    - Emit an [`Event`] to the observer.
///    - Return as soon as `|g(y)| < eps`.
/// 3. If the cap is reached, return the last iterate with
///    [`Status::MaxIters`].
///
/// # Observer
///
/// The observer receives an [`Event`] after each update and may return
/// [`Action::StopEarly`] to return the current iterate.
///
/// # Errors
///
/// Returns an error if the guess is not finite, if `g'(y)` is zero at an
/// iterate, or if an iterate or residual becomes non-finite.
pub fn solve<E, Obs>(
    equation: &E,
    guess: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    E: ScalarEquation,
    Obs: Observer<Event, Action>,
{
    if !guess.is_finite() {
        return Err(Error::NonFiniteGuess { guess });
    }

    let mut y = guess;
    let mut residual = checked_residual(equation, y)?;

    if residual.abs() < config.eps() {
        return Ok(Solution {
            status: Status::Converged,
            y,
            residual,
            iters: 0,
        });
    }

    for iter in 1..=config.iter_max() {
        let slope = equation.derivative(y);

        #[allow(clippy::float_cmp)]
        if slope == 0.0 {
            return Err(Error::ZeroDerivative { y, iter });
        }

        y -= residual / slope;
        if !y.is_finite() {
            return Err(Error::NonFiniteIterate { y, iter });
        }
        residual = checked_residual(equation, y)?;

        let event = Event { iter, y, residual };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                y,
                residual,
                iters: iter,
            });
        }

        if residual.abs() < config.eps() {
            return Ok(Solution {
                status: Status::Converged,
                y,
                residual,
                iters: iter,
            });
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        y,
        residual,
        iters: config.iter_max(),
    })
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// Returns an error if the guess is not finite, if `g'(y)` is zero at an
/// iterate, or if an iterate or residual becomes non-finite.
pub fn solve_unobserved<E>(equation: &E, guess: f64, config: &Config) -> Result<Solution, Error>
where
    E: ScalarEquation,
{
    solve(equation, guess, config, ())
}

fn checked_residual<E: ScalarEquation>(equation: &E, y: f64) -> Result<f64, Error> {
    let residual = equation.residual(y);
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(Error::NonFiniteResidual { y, residual })
    }
}
