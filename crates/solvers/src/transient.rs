//! Fixed-step integration of scalar ODE problems.
//!
//! An [`Integrator`] owns a [`Problem`], builds a uniform grid for each
//! requested resolution, and applies one of the [`Scheme`] variants node by
//! node. Completed runs accumulate in a [`TrajectoryStore`] for side-by-side
//! comparison. Implicit schemes solve a nonlinear equation at every node with
//! [`newton`]; nodes where Newton's method hits its iteration cap are recorded
//! in a [`RunLog`] bucket keyed by [`RunKey`].
//!
//! # Example
//!
//! ```
//! use odebox_core::Problem;
//! use odebox_solvers::transient::{Integrator, Scheme};
//!
//! let problem = Problem::new(0.0, 1.0, 1.0, |_x: f64, y: f64| y)?
//!     .with_derivative(|_x: f64, _y: f64| 1.0);
//! let mut integrator = Integrator::new(problem);
//!
//! integrator.run(10, Scheme::ExplicitEuler)?;
//! integrator.run(10, Scheme::ImplicitTrapezoid)?;
//!
//! for trajectory in integrator.trajectories() {
//!     println!("{}: y(1) = {}", trajectory.label(), trajectory.last().1);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Problem`]: odebox_core::Problem
//! [`newton`]: crate::equation::newton

mod grid;
mod integrator;
mod key;
mod run_log;
mod scheme;
mod trajectory;

pub use integrator::{Action, Error, Event, Integrator};
pub use key::RunKey;
pub use run_log::{LogEntry, RunLog};
pub use scheme::{ParseSchemeError, Scheme};
pub use trajectory::{Trajectory, TrajectoryStore};
