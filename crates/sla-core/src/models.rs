use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Numeric identifier of the client an `[sla]` line belongs to.
pub type ClientIndex = u64;

/// A parsed `[sla] <index> ...` log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaEvent {
    /// 1-based position of the line in its input.
    pub line_number: u64,
    /// Client the event is attributed to.
    pub client_index: ClientIndex,
}

/// A maximal stretch of consecutive SLA events sharing one client index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub client_index: ClientIndex,
    /// Number of matching lines in the run, always at least 1.
    pub length: u64,
}

impl Run {
    /// Number of SLA changes the run contributes to the histogram.
    ///
    /// The last event of every run is the end-of-trace marker, so a run of
    /// length `n` counts `n - 1` changes. A run made only of the marker
    /// yields `None` and is discarded.
    pub fn change_count(&self) -> Option<u64> {
        match self.length {
            0 | 1 => None,
            n => Some(n - 1),
        }
    }
}

/// One row of the histogram: how many clients saw `changes` SLA changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub changes: u64,
    pub clients: u64,
}

/// Frequency table from SLA change count to number of runs with that count.
///
/// Keys are kept in ascending order, so iteration always yields the report
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<HistogramBucket>")]
pub struct Histogram {
    counts: BTreeMap<u64, u64>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more run with `changes` SLA changes.
    pub fn record(&mut self, changes: u64) {
        *self.counts.entry(changes).or_insert(0) += 1;
    }

    /// Number of runs recorded with exactly `changes` SLA changes.
    pub fn get(&self, changes: u64) -> Option<u64> {
        self.counts.get(&changes).copied()
    }

    /// `(changes, clients)` pairs in ascending order of `changes`.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.iter().map(|(&k, &v)| (k, v))
    }

    /// Number of distinct change counts.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of runs that made it into the histogram.
    pub fn total_runs(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Sum of SLA changes across all recorded runs.
    pub fn total_changes(&self) -> u64 {
        self.counts.iter().map(|(k, v)| k * v).sum()
    }

    pub fn buckets(&self) -> Vec<HistogramBucket> {
        self.iter()
            .map(|(changes, clients)| HistogramBucket { changes, clients })
            .collect()
    }
}

impl From<Histogram> for Vec<HistogramBucket> {
    fn from(histogram: Histogram) -> Self {
        histogram.buckets()
    }
}
