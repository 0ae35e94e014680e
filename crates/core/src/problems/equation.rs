/// A scalar equation `g(y) = 0` with a known derivative `g'(y)`.
///
/// Root finders such as Newton's method use both the residual and its
/// derivative. Implement this on a small struct that captures whatever
/// fixed parameters the residual depends on, or pass a `(g, g')` pair of
/// closures.
pub trait ScalarEquation {
    /// Returns the residual `g(y)`.
    fn residual(&self, y: f64) -> f64;

    /// Returns the derivative `g'(y)`.
    fn derivative(&self, y: f64) -> f64;
}

/// A `(residual, derivative)` pair of closures is a scalar equation.
impl<G, Gp> ScalarEquation for (G, Gp)
where
    G: Fn(f64) -> f64,
    Gp: Fn(f64) -> f64,
{
    fn residual(&self, y: f64) -> f64 {
        (self.0)(y)
    }

    fn derivative(&self, y: f64) -> f64 {
        (self.1)(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn closure_pair_evaluates_both_parts() {
        let equation = (|y: f64| y * y - 2.0, |y: f64| 2.0 * y);
        assert_relative_eq!(equation.residual(3.0), 7.0);
        assert_relative_eq!(equation.derivative(3.0), 6.0);
    }
}
