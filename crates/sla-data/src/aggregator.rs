//! Run-length aggregation of SLA events into the change histogram.

use serde::{Deserialize, Serialize};
use sla_core::models::{ClientIndex, Histogram, Run};
use tracing::trace;

// ── RunStats ──────────────────────────────────────────────────────────────────

/// Counters describing how runs were turned into histogram entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Runs closed, recorded or not.
    pub runs_total: u64,
    /// Runs that contributed an entry to the histogram.
    pub runs_recorded: u64,
    /// Runs consisting only of the end-of-trace marker.
    pub runs_discarded: u64,
}

// ── RunAggregator ─────────────────────────────────────────────────────────────

/// Groups consecutive events by client index and counts the resulting runs.
///
/// Only the index of the immediately preceding event decides whether a new
/// run starts; the aggregator never sees non-matching lines.
#[derive(Debug, Default)]
pub struct RunAggregator {
    previous: Option<ClientIndex>,
    current_length: u64,
    histogram: Histogram,
    stats: RunStats,
}

impl RunAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the client index of the next SLA event.
    pub fn observe(&mut self, client_index: ClientIndex) {
        if self.previous != Some(client_index) {
            self.close_run();
            self.current_length = 0;
        }
        self.current_length += 1;
        self.previous = Some(client_index);
    }

    /// Close the final run and return the histogram with its counters.
    pub fn finish(mut self) -> (Histogram, RunStats) {
        self.close_run();
        (self.histogram, self.stats)
    }

    fn close_run(&mut self) {
        let Some(client_index) = self.previous else {
            return;
        };
        let run = Run {
            client_index,
            length: self.current_length,
        };

        self.stats.runs_total += 1;
        match run.change_count() {
            Some(changes) => {
                trace!(
                    "client {}: run of {} events, {} changes",
                    run.client_index,
                    run.length,
                    changes
                );
                self.histogram.record(changes);
                self.stats.runs_recorded += 1;
            }
            None => {
                trace!("client {}: end-of-trace only, discarded", run.client_index);
                self.stats.runs_discarded += 1;
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
