/// Indicates how the Newton solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The residual magnitude fell below the tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a Newton solve.
///
/// Non-convergence is not an error: a [`Status::MaxIters`] solution carries
/// the last iterate so the caller can proceed with a degraded estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best available estimate of the root.
    pub y: f64,

    /// Residual at `y`.
    pub residual: f64,

    /// Number of Newton updates performed.
    pub iters: usize,
}

impl Solution {
    /// Returns true if the solver met the residual tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
