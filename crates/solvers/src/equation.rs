//! Solvers for scalar equations: finding `y` such that `g(y) = 0`.
//!
//! A [`ScalarEquation`] supplies a residual and its derivative. Solvers in
//! this module drive that residual toward zero.
//!
//! # Solvers
//!
//! - [`newton`]: Newton-Raphson iteration from a single initial guess
//!
//! [`ScalarEquation`]: odebox_core::ScalarEquation

pub mod newton;
