use super::{Interval, ProblemError};

/// The right-hand side `f(x, y)` of a scalar ODE `y' = f(x, y)`.
///
/// The same trait describes the optional derivative `f_y(x, y) = ∂f/∂y`
/// that implicit schemes need. Closures of the form `Fn(f64, f64) -> f64`
/// implement it automatically.
pub trait Rhs {
    /// Evaluates the function at `(x, y)`.
    fn eval(&self, x: f64, y: f64) -> f64;
}

impl<F> Rhs for F
where
    F: Fn(f64, f64) -> f64,
{
    fn eval(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// A scalar initial value problem `y' = f(x, y)`, `y(x0) = y0`.
///
/// The derivative `f_y` is optional and only required by implicit schemes.
/// A problem is immutable once built; attach the derivative with
/// [`Problem::with_derivative`].
///
/// # Example
///
/// ```
/// use odebox_core::Problem;
///
/// let problem = Problem::new(0.0, 1.0, 1.0, |_x: f64, y: f64| y)
///     .expect("valid problem")
///     .with_derivative(|_x: f64, _y: f64| 1.0);
///
/// assert!(problem.derivative().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Problem<F, D = fn(f64, f64) -> f64> {
    interval: Interval,
    y0: f64,
    rhs: F,
    derivative: Option<D>,
}

impl<F: Rhs> Problem<F> {
    /// Creates a problem without a derivative.
    ///
    /// If `x0 > xend` the bounds are swapped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are equal or non-finite, or if `y0` is
    /// not finite.
    pub fn new(x0: f64, xend: f64, y0: f64, rhs: F) -> Result<Self, ProblemError> {
        let interval = Interval::new(x0, xend)?;
        Self::on(interval, y0, rhs)
    }

    /// Creates a problem over an already normalized interval.
    ///
    /// # Errors
    ///
    /// Returns an error if `y0` is not finite.
    pub fn on(interval: Interval, y0: f64, rhs: F) -> Result<Self, ProblemError> {
        if !y0.is_finite() {
            return Err(ProblemError::NonFiniteInitialValue { value: y0 });
        }

        Ok(Self {
            interval,
            y0,
            rhs,
            derivative: None,
        })
    }
}

impl<F: Rhs, D: Rhs> Problem<F, D> {
    /// Attaches the derivative `f_y(x, y)`, replacing any previous one.
    #[must_use]
    pub fn with_derivative<G: Rhs>(self, derivative: G) -> Problem<F, G> {
        Problem {
            interval: self.interval,
            y0: self.y0,
            rhs: self.rhs,
            derivative: Some(derivative),
        }
    }

    /// Returns the normalized integration interval.
    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Returns the initial value at the interval start.
    #[must_use]
    pub fn y0(&self) -> f64 {
        self.y0
    }

    /// Returns the right-hand side.
    pub fn rhs(&self) -> &F {
        &self.rhs
    }

    /// Returns the derivative, if one was supplied.
    pub fn derivative(&self) -> Option<&D> {
        self.derivative.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn builds_problem_without_derivative() {
        let problem = Problem::new(0.0, 2.0, 1.5, |x: f64, y: f64| x + y).expect("valid problem");

        assert_relative_eq!(problem.y0(), 1.5);
        assert_relative_eq!(problem.interval().end(), 2.0);
        assert_relative_eq!(problem.rhs().eval(1.0, 2.0), 3.0);
        assert!(problem.derivative().is_none());
    }

    #[test]
    fn attaches_derivative() {
        let problem = Problem::new(0.0, 1.0, 1.0, |_x: f64, y: f64| y * y)
            .expect("valid problem")
            .with_derivative(|_x: f64, y: f64| 2.0 * y);

        let derivative = problem.derivative().expect("derivative attached");
        assert_relative_eq!(derivative.eval(0.0, 3.0), 6.0);
    }

    #[test]
    fn normalizes_reversed_interval() {
        let problem = Problem::new(5.0, 1.0, 0.0, |_x: f64, _y: f64| 0.0).expect("valid problem");

        assert_relative_eq!(problem.interval().start(), 1.0);
        assert_relative_eq!(problem.interval().end(), 5.0);
    }

    #[test]
    fn rejects_equal_bounds_and_bad_initial_value() {
        let result = Problem::new(1.0, 1.0, 0.0, |_x: f64, _y: f64| 0.0);
        assert!(matches!(result, Err(ProblemError::DegenerateInterval { .. })));

        let result = Problem::new(0.0, 1.0, f64::NAN, |_x: f64, _y: f64| 0.0);
        assert!(matches!(result, Err(ProblemError::NonFiniteInitialValue { .. })));
    }
}
