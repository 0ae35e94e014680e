mod equation;
mod error;
mod interval;
mod ode;

pub use equation::ScalarEquation;
pub use error::ProblemError;
pub use interval::Interval;
pub use ode::{Problem, Rhs};
