use super::ProblemError;

/// A closed integration interval `[start, end]` with `start < end`.
///
/// Bounds given in reverse order are swapped with a warning rather than
/// rejected. Equal bounds leave nothing to integrate and are an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Creates an interval from `x0` and `xend`, normalizing their order.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite, if the bounds are
    /// equal, or if their distance overflows.
    pub fn new(x0: f64, xend: f64) -> Result<Self, ProblemError> {
        if !x0.is_finite() {
            return Err(ProblemError::NonFiniteBound { value: x0 });
        }
        if !xend.is_finite() {
            return Err(ProblemError::NonFiniteBound { value: xend });
        }

        #[allow(clippy::float_cmp)]
        if x0 == xend {
            return Err(ProblemError::DegenerateInterval { x: x0 });
        }

        if !(xend - x0).is_finite() {
            return Err(ProblemError::UnboundedWidth { x0, xend });
        }

        if x0 > xend {
            log::warn!("x0 ({x0}) is greater than xend ({xend}); the bounds were swapped");
            return Ok(Self {
                start: xend,
                end: x0,
            });
        }

        Ok(Self {
            start: x0,
            end: xend,
        })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns `end - start`, which is always positive.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}
