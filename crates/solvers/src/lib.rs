//! Numerical solvers for scalar ODE problems.
//!
//! - [`equation`]: root finding for scalar equations (Newton-Raphson)
//! - [`transient`]: step schemes and the integrator that drives them
//! - [`field`]: direction-field sampling of a right-hand side

pub mod equation;
pub mod field;
pub mod transient;
