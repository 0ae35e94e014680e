use thiserror::Error;

use crate::{
    equation::newton,
    transient::{ParseSchemeError, RunKey, Scheme},
};

/// Errors that can abort an integration run.
///
/// Configuration errors are detected before any stepping and leave the
/// integrator unchanged. Arithmetic errors abort the run partway through;
/// no trajectory is stored for it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("a grid needs at least 2 points, got {n}")]
    TooFewPoints { n: usize },

    #[error(transparent)]
    UnknownScheme(#[from] ParseSchemeError),

    #[error("{scheme} is implicit and requires the derivative f_y")]
    MissingDerivative { scheme: Scheme },

    #[error("root finding failed for {key} at point {index}")]
    Newton {
        key: RunKey,
        index: usize,
        #[source]
        source: newton::Error,
    },

    #[error("non-finite value y = {y} at x = {x} for {key} (point {index})")]
    NonFinite {
        key: RunKey,
        index: usize,
        x: f64,
        y: f64,
    },
}
