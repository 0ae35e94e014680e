/// Event emitted by the Newton solver after each update.
///
/// Iteration 0 (the initial guess) is not emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The updated iterate.
    pub y: f64,

    /// Residual at the updated iterate.
    pub residual: f64,
}
