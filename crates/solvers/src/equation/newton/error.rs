use thiserror::Error;

/// Errors that can occur during a Newton solve.
///
/// Reaching the iteration limit is not an error; see
/// [`Status::MaxIters`](super::Status::MaxIters).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial guess is not finite: {guess}")]
    NonFiniteGuess { guess: f64 },

    #[error("derivative is zero at y = {y} (iteration {iter})")]
    ZeroDerivative { y: f64, iter: usize },

    #[error("non-finite iterate {y} at iteration {iter}")]
    NonFiniteIterate { y: f64, iter: usize },

    #[error("non-finite residual {residual} at y = {y}")]
    NonFiniteResidual { y: f64, residual: f64 },
}
