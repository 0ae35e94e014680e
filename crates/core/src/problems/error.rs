use thiserror::Error;

/// Errors that can occur when constructing a [`Problem`](crate::Problem).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ProblemError {
    #[error("interval is degenerate: x0 and xend are both {x}")]
    DegenerateInterval { x: f64 },

    #[error("interval bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error("interval width overflows: x0 = {x0}, xend = {xend}")]
    UnboundedWidth { x0: f64, xend: f64 },

    #[error("initial value is not finite: {value}")]
    NonFiniteInitialValue { value: f64 },
}
