//! Percentage-complete reporting for long runs.

use odebox_core::Observer;

use crate::traits::HasProgress;

/// An observer that logs run progress at `debug` level.
///
/// Lines look like `Progress:  42.00 %`. By default every event is reported;
/// [`ProgressLogger::every`] thins the output to one line per `percent`
/// points of progress. The final event of a run (100 %) is always reported,
/// and a drop in progress is treated as the start of a new run.
///
/// The logger never returns an action, so it cannot influence the run.
#[derive(Debug, Clone)]
pub struct ProgressLogger {
    every: f64,
    next: f64,
    last: f64,
    reported: usize,
}

impl ProgressLogger {
    /// Creates a logger that reports every event.
    #[must_use]
    pub fn new() -> Self {
        Self::every(0.0)
    }

    /// Creates a logger that reports at most once per `percent` points.
    #[must_use]
    pub fn every(percent: f64) -> Self {
        Self {
            every: percent.max(0.0),
            next: 0.0,
            last: 0.0,
            reported: 0,
        }
    }

    /// Returns how many progress lines have been emitted.
    #[must_use]
    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl Default for ProgressLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: HasProgress, A> Observer<E, A> for ProgressLogger {
    fn observe(&mut self, event: &E) -> Option<A> {
        let progress = event.progress();
        if progress < self.last {
            self.next = 0.0;
        }
        self.last = progress;

        if progress >= self.next || progress >= 100.0 {
            log::debug!("Progress: {progress:6.2} %");
            self.reported += 1;
            self.next = progress + self.every;
        }
        None
    }
}

/// Allows `&mut ProgressLogger` to be passed to solvers that take an observer
/// by value, so the logger can be inspected after the run.
impl<E: HasProgress, A> Observer<E, A> for &mut ProgressLogger {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
