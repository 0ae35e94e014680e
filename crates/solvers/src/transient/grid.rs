use odebox_core::Interval;

use super::{RunKey, Trajectory};

/// A uniform grid over an interval with the y-values filled left to right.
///
/// `y[0]` holds the initial value; `y[k]` for `k > 0` is a placeholder until
/// step `k` has been computed.
pub(super) struct Grid {
    x: Vec<f64>,
    y: Vec<f64>,
    h: f64,
}

/// The state a single step starts from.
#[derive(Debug, Clone, Copy)]
pub(super) struct Node {
    pub(super) x: f64,
    pub(super) y: f64,
    pub(super) x_next: f64,
    pub(super) h: f64,
}

impl Grid {
    /// Builds `n` equally spaced points over `interval`.
    ///
    /// The first and last points are exactly `interval.start()` and
    /// `interval.end()`. Requires `n >= 2`.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn uniform(interval: Interval, n: usize, y0: f64) -> Self {
        debug_assert!(n >= 2);

        let last = n - 1;
        let h = interval.width() / last as f64;
        let x = (0..n)
            .map(|i| match i {
                0 => interval.start(),
                i if i == last => interval.end(),
                i => interval.start() + i as f64 * h,
            })
            .collect();

        let mut y = vec![0.0; n];
        y[0] = y0;

        Self { x, y, h }
    }

    /// Returns the node at index `k`, which must have a successor.
    pub(super) fn node(&self, k: usize) -> Node {
        Node {
            x: self.x[k],
            y: self.y[k],
            x_next: self.x[k + 1],
            h: self.h,
        }
    }

    pub(super) fn set(&mut self, k: usize, y: f64) {
        self.y[k] = y;
    }

    pub(super) fn into_trajectory(self, key: RunKey) -> Trajectory {
        Trajectory::new(key, self.x, self.y)
    }
}
