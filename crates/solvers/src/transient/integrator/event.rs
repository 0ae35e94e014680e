use crate::transient::RunKey;

/// Event emitted by the integrator after each completed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The run being integrated.
    pub key: RunKey,

    /// The step just completed (1-based, up to `steps`).
    pub step: usize,

    /// Total number of steps in the run, `n - 1`.
    pub steps: usize,

    /// Abscissa of the newly computed point.
    pub x: f64,

    /// The newly computed value.
    pub y: f64,
}

impl Event {
    /// Returns the percentage of the run completed, in `(0, 100]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        100.0 * self.step as f64 / self.steps as f64
    }
}
