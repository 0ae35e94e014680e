//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a residual value
//! - [`HasProgress`]: events that report how much of a run is done
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use odebox_core::Observer;
//! use odebox_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use odebox_solvers::{equation::newton, transient};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event that reports progress through a run.
pub trait HasProgress {
    /// Returns the percentage completed, in `[0, 100]`.
    fn progress(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasProgress for transient::Event {
    fn progress(&self) -> f64 {
        transient::Event::progress(self)
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use odebox_core::Observer;
    use odebox_solvers::equation::newton::{Config, Status};

    struct GoodEnough {
        tolerance: f64,
    }

    impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.residual().abs() < self.tolerance).then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_stops_newton_early() {
        let equation = (|y: f64| y * y - 2.0, |y: f64| 2.0 * y);

        let solution = newton::solve(
            &equation,
            1.0,
            &Config::default(),
            GoodEnough { tolerance: 1e-2 },
        )
        .expect("should stop cleanly");

        // 1 → 1.5 (residual 0.25) → 17/12 (residual 1/144)
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
        assert_relative_eq!(solution.y, 17.0 / 12.0, epsilon = 1e-12);
    }
}
