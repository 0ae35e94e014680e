mod action;
mod error;
mod event;

pub use action::Action;
pub use error::Error;
pub use event::Event;

use odebox_core::{Observer, Problem, Rhs};

use crate::equation::newton::{self, Status};

use super::{
    LogEntry, RunKey, RunLog, Scheme, Trajectory, TrajectoryStore,
    grid::Grid,
    scheme::{Advance, StepError},
};

/// Integrates a [`Problem`] with fixed-step schemes and keeps every run.
///
/// Each call to [`run`](Integrator::run) builds a fresh uniform grid from
/// `y0`, steps through it left to right, and on success appends a
/// [`Trajectory`] to the store. Runs are independent: there is no resumption
/// of a partial run.
///
/// Newton tolerances for implicit schemes belong to the integrator. Change
/// them with [`set_tolerances`](Integrator::set_tolerances) before a run and
/// restore the defaults with [`reset_tolerances`](Integrator::reset_tolerances).
pub struct Integrator<F, D = fn(f64, f64) -> f64> {
    problem: Problem<F, D>,
    tolerances: newton::Config,
    trajectories: TrajectoryStore,
    log: RunLog,
}

impl<F: Rhs, D: Rhs> Integrator<F, D> {
    /// Creates an integrator with default Newton tolerances.
    pub fn new(problem: Problem<F, D>) -> Self {
        Self::with_tolerances(problem, newton::Config::default())
    }

    /// Creates an integrator with the given Newton tolerances.
    pub fn with_tolerances(problem: Problem<F, D>, tolerances: newton::Config) -> Self {
        Self {
            problem,
            tolerances,
            trajectories: TrajectoryStore::default(),
            log: RunLog::default(),
        }
    }

    /// Returns the problem being integrated.
    pub fn problem(&self) -> &Problem<F, D> {
        &self.problem
    }

    /// Integrates over `n` grid points with `scheme`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n < 2`, if `scheme` is implicit and the problem
    /// has no derivative, or if a step fails numerically.
    pub fn run(&mut self, n: usize, scheme: Scheme) -> Result<&Trajectory, Error> {
        self.run_observed(n, scheme, ())
    }

    /// Integrates with a scheme selected by its short name (see [`Scheme::NAMES`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownScheme`] listing the valid names if `name` is
    /// not recognized, otherwise the same errors as [`run`](Integrator::run).
    pub fn run_named(&mut self, n: usize, name: &str) -> Result<&Trajectory, Error> {
        let scheme = name.parse()?;
        self.run(n, scheme)
    }

    /// Integrates like [`run`](Integrator::run), emitting an [`Event`] after
    /// every step.
    ///
    /// # Algorithm
    ///
    /// 1. Validate `n` and, for implicit schemes, the derivative.
    /// 2. For implicit schemes, open an empty log bucket for the run.
    /// 3. Build a uniform grid with `y[0] = y0`.
    /// 4. For `k = 0..n-1`:
    ///    - Apply the scheme to node `k` to get `y[k+1]`.
    ///    - If Newton's method hit its cap, record a [`LogEntry`].
    ///    - Reject non-finite values.
    ///    - Emit an [`Event`] to the observer.
    /// 5. Store and return the trajectory.
    ///
    /// # Errors
    ///
    /// Returns an error if `n < 2`, if `scheme` is implicit and the problem
    /// has no derivative, or if a step fails numerically.
    pub fn run_observed<Obs>(
        &mut self,
        n: usize,
        scheme: Scheme,
        mut observer: Obs,
    ) -> Result<&Trajectory, Error>
    where
        Obs: Observer<Event, Action>,
    {
        if n < 2 {
            return Err(Error::TooFewPoints { n });
        }

        let derivative = self.problem.derivative();
        if scheme.is_implicit() && derivative.is_none() {
            return Err(Error::MissingDerivative { scheme });
        }

        let key = RunKey::new(scheme, n);
        if scheme.is_implicit() {
            self.log.open(key);
        }

        let mut grid = Grid::uniform(self.problem.interval(), n, self.problem.y0());
        let steps = n - 1;

        for k in 0..steps {
            let node = grid.node(k);
            let index = k + 1;

            let advance = scheme
                .advance(node, self.problem.rhs(), derivative, &self.tolerances)
                .map_err(|err| match err {
                    StepError::MissingDerivative => Error::MissingDerivative { scheme },
                    StepError::Newton(source) => Error::Newton { key, index, source },
                })?;

            let y = match advance {
                Advance::Explicit(y) => y,
                Advance::Implicit(solution) => {
                    if solution.status == Status::MaxIters {
                        let entry = LogEntry {
                            index,
                            x: node.x_next,
                            iter_max: self.tolerances.iter_max(),
                            guess: node.y,
                            last_iterate: solution.y,
                            residual: solution.residual,
                        };
                        log::warn!("{key}: {entry}");
                        self.log.record(key, entry);
                    }
                    solution.y
                }
            };

            if !y.is_finite() {
                return Err(Error::NonFinite {
                    key,
                    index,
                    x: node.x_next,
                    y,
                });
            }
            grid.set(index, y);

            let event = Event {
                key,
                step: index,
                steps,
                x: node.x_next,
                y,
            };
            if let Some(action) = observer.observe(&event) {
                match action {}
            }
        }

        Ok(self.trajectories.push(grid.into_trajectory(key)))
    }

    /// Returns all completed trajectories in run order.
    pub fn trajectories(&self) -> &TrajectoryStore {
        &self.trajectories
    }

    /// Drops every stored trajectory and every log bucket.
    pub fn clear_trajectories(&mut self) {
        self.trajectories.clear();
        self.log.clear();
    }

    /// Returns the Newton tolerances used by implicit schemes.
    pub fn tolerances(&self) -> newton::Config {
        self.tolerances
    }

    /// Replaces the Newton tolerances for subsequent runs.
    pub fn set_tolerances(&mut self, tolerances: newton::Config) {
        self.tolerances = tolerances;
    }

    /// Restores the default Newton tolerances.
    pub fn reset_tolerances(&mut self) {
        self.tolerances = newton::Config::default();
    }

    /// Returns the non-convergence log of all implicit runs.
    pub fn log(&self) -> &RunLog {
        &self.log
    }

    /// Returns the keys of all implicit runs with a log bucket.
    pub fn log_keys(&self) -> Vec<RunKey> {
        self.log.keys().collect()
    }

    /// Returns the log entries of one run, or `None` if it has no bucket.
    pub fn log_entries(&self, key: &RunKey) -> Option<&[LogEntry]> {
        self.log.entries(key)
    }
}
