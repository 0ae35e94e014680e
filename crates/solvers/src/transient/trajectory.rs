use super::{RunKey, Scheme};

/// A completed run: the grid abscissae, the computed values, and the run key.
///
/// Both sequences have the same length `n >= 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    key: RunKey,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Trajectory {
    pub(super) fn new(key: RunKey, x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Self { key, x, y }
    }

    #[must_use]
    pub fn key(&self) -> RunKey {
        self.key
    }

    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.key.scheme
    }

    /// Returns the number of grid points.
    #[must_use]
    pub fn n(&self) -> usize {
        self.key.n
    }

    /// Returns the label used for rendering, e.g. `"RK4, n=20"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.key.to_string()
    }

    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Returns `(x, y)` pairs in grid order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Returns the final point `(xend, y[n-1])`.
    #[must_use]
    pub fn last(&self) -> (f64, f64) {
        let i = self.x.len() - 1;
        (self.x[i], self.y[i])
    }

    /// Returns the smallest and largest y-value.
    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        self.y
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| {
                (lo.min(y), hi.max(y))
            })
    }
}

/// Completed trajectories in the order they were produced.
///
/// Insertion order is stable, so callers can assign visual identifiers by
/// index.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryStore {
    runs: Vec<Trajectory>,
}

impl TrajectoryStore {
    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Returns true if no trajectories are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Trajectory> {
        self.runs.get(index)
    }

    /// Returns the most recently stored trajectory.
    #[must_use]
    pub fn last(&self) -> Option<&Trajectory> {
        self.runs.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trajectory> {
        self.runs.iter()
    }

    /// Returns the y-range spanned by all trajectories, or `None` if empty.
    #[must_use]
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.runs
            .iter()
            .map(Trajectory::y_range)
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)))
    }

    pub(super) fn push(&mut self, trajectory: Trajectory) -> &Trajectory {
        let index = self.runs.len();
        self.runs.push(trajectory);
        &self.runs[index]
    }

    pub(super) fn clear(&mut self) {
        self.runs.clear();
    }
}

impl<'a> IntoIterator for &'a TrajectoryStore {
    type Item = &'a Trajectory;
    type IntoIter = std::slice::Iter<'a, Trajectory>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}
