//! Residuals solved by the implicit schemes.
//!
//! Each residual captures the values of the current step by copy, so the
//! equation handed to Newton's method is fixed for the duration of the solve.

use odebox_core::{Rhs, ScalarEquation};

use super::Node;

/// Backward Euler: `G(y) = y[k] - y + h·f(x[k+1], y)`.
pub(super) struct BackwardEuler<'a, F, D> {
    rhs: &'a F,
    derivative: &'a D,
    x_next: f64,
    y_k: f64,
    h: f64,
}

impl<'a, F: Rhs, D: Rhs> BackwardEuler<'a, F, D> {
    pub(super) fn new(rhs: &'a F, derivative: &'a D, node: Node) -> Self {
        Self {
            rhs,
            derivative,
            x_next: node.x_next,
            y_k: node.y,
            h: node.h,
        }
    }
}

impl<F: Rhs, D: Rhs> ScalarEquation for BackwardEuler<'_, F, D> {
    fn residual(&self, y: f64) -> f64 {
        self.y_k - y + self.h * self.rhs.eval(self.x_next, y)
    }

    fn derivative(&self, y: f64) -> f64 {
        self.h * self.derivative.eval(self.x_next, y) - 1.0
    }
}

/// Trapezoidal rule:
/// `G(y) = y[k] + h/2·f(x[k], y[k]) - y + h/2·f(x[k+1], y)`.
///
/// The explicit half `y[k] + h/2·f(x[k], y[k])` is evaluated once up front.
pub(super) struct Trapezoid<'a, F, D> {
    rhs: &'a F,
    derivative: &'a D,
    x_next: f64,
    known: f64,
    half_h: f64,
}

impl<'a, F: Rhs, D: Rhs> Trapezoid<'a, F, D> {
    pub(super) fn new(rhs: &'a F, derivative: &'a D, node: Node) -> Self {
        let half_h = 0.5 * node.h;
        Self {
            rhs,
            derivative,
            x_next: node.x_next,
            known: node.y + half_h * rhs.eval(node.x, node.y),
            half_h,
        }
    }
}

impl<F: Rhs, D: Rhs> ScalarEquation for Trapezoid<'_, F, D> {
    fn residual(&self, y: f64) -> f64 {
        self.known - y + self.half_h * self.rhs.eval(self.x_next, y)
    }

    fn derivative(&self, y: f64) -> f64 {
        self.half_h * self.derivative.eval(self.x_next, y) - 1.0
    }
}

/// Implicit midpoint:
/// `G(y) = y[k] - y + h·f(x[k+1] + h/2, (y + y[k])/2)`.
///
/// The slope is sampled at `x[k+1] + h/2`, half a step past the new node.
pub(super) struct Midpoint<'a, F, D> {
    rhs: &'a F,
    derivative: &'a D,
    x_mid: f64,
    y_k: f64,
    h: f64,
}

impl<'a, F: Rhs, D: Rhs> Midpoint<'a, F, D> {
    pub(super) fn new(rhs: &'a F, derivative: &'a D, node: Node) -> Self {
        Self {
            rhs,
            derivative,
            x_mid: node.x_next + 0.5 * node.h,
            y_k: node.y,
            h: node.h,
        }
    }

    fn average(&self, y: f64) -> f64 {
        0.5 * (y + self.y_k)
    }
}

impl<F: Rhs, D: Rhs> ScalarEquation for Midpoint<'_, F, D> {
    fn residual(&self, y: f64) -> f64 {
        self.y_k - y + self.h * self.rhs.eval(self.x_mid, self.average(y))
    }

    fn derivative(&self, y: f64) -> f64 {
        0.5 * self.h * self.derivative.eval(self.x_mid, self.average(y)) - 1.0
    }
}
