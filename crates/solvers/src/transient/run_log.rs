use std::{collections::BTreeMap, fmt};

use super::RunKey;

/// A record of Newton's method hitting its iteration cap at one grid point.
///
/// The step still completes with the last iterate; the entry keeps enough
/// context to diagnose the degraded estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogEntry {
    /// Grid index of the point being solved for.
    pub index: usize,

    /// Abscissa of that point.
    pub x: f64,

    /// The iteration cap that was reached.
    pub iter_max: usize,

    /// The initial guess, `y[index - 1]`.
    pub guess: f64,

    /// The last Newton iterate, accepted as `y[index]`.
    pub last_iterate: f64,

    /// Residual at the last iterate.
    pub residual: f64,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max. iteration number ({}) reached at point {} (x = {}): \
             initial guess {}, last iterate {}, residual {:e}",
            self.iter_max, self.index, self.x, self.guess, self.last_iterate, self.residual
        )
    }
}

/// Non-convergence records grouped into one bucket per implicit run.
///
/// A bucket is opened when an implicit run starts, so a run that converged
/// everywhere still has an (empty) bucket. Re-running the same scheme and
/// resolution replaces the earlier bucket.
#[derive(Debug, Clone, Default)]
pub struct RunLog {
    buckets: BTreeMap<RunKey, Vec<LogEntry>>,
}

impl RunLog {
    /// Returns the keys of all buckets, ordered by scheme then resolution.
    pub fn keys(&self) -> impl Iterator<Item = RunKey> + '_ {
        self.buckets.keys().copied()
    }

    /// Returns the entries recorded for `key`, or `None` if no such run exists.
    #[must_use]
    pub fn entries(&self, key: &RunKey) -> Option<&[LogEntry]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Iterates over all buckets.
    pub fn iter(&self) -> impl Iterator<Item = (RunKey, &[LogEntry])> {
        self.buckets
            .iter()
            .map(|(key, entries)| (*key, entries.as_slice()))
    }

    /// Returns the number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if no implicit run has been started.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Returns the total number of entries across all buckets.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub(super) fn open(&mut self, key: RunKey) {
        self.buckets.insert(key, Vec::new());
    }

    pub(super) fn record(&mut self, key: RunKey, entry: LogEntry) {
        self.buckets.entry(key).or_default().push(entry);
    }

    pub(super) fn clear(&mut self) {
        self.buckets.clear();
    }
}
