//! Core traits and types for odebox.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Rhs`]: a right-hand side `f(x, y)` of the scalar ODE `y' = f(x, y)`
//! - [`Problem`]: an initial value problem over a normalized [`Interval`]
//! - [`ScalarEquation`]: a residual and its derivative, solved by root finders
//! - [`Observer`]: receives solver events and optionally returns control actions

mod observer;
mod problems;

pub use observer::Observer;
pub use problems::{Interval, Problem, ProblemError, Rhs, ScalarEquation};
