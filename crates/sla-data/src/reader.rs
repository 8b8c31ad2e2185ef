//! Line-by-line scanning of SLA trace logs.
//!
//! Opens the input, feeds every `[sla]` event through a [`RunAggregator`] and
//! returns the finished histogram. Any parse or I/O failure aborts the scan;
//! no partial histogram ever escapes.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sla_core::models::Histogram;
use sla_core::{Result, SlaError};
use tracing::{debug, trace};

use crate::aggregator::{RunAggregator, RunStats};
use crate::matcher::parse_event;

// ── Public types ──────────────────────────────────────────────────────────────

/// Line and run counters collected during a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Lines consumed from the input.
    pub lines_read: u64,
    /// Lines recognised as SLA events.
    pub lines_matched: u64,
    #[serde(flatten)]
    pub runs: RunStats,
}

/// Result of a completed scan.
#[derive(Debug, Clone)]
pub struct ScanOutput {
    pub histogram: Histogram,
    pub stats: ScanStats,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Open `path` for buffered reading.
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| {
        debug!("Failed to open {}: {}", path.display(), source);
        SlaError::FileOpen {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(BufReader::new(file))
}

/// Scan every line of `reader`.
///
/// `source_name` is only used in diagnostics and error messages.
pub fn scan_lines<R: BufRead>(reader: R, source_name: &str) -> Result<ScanOutput> {
    let mut aggregator = RunAggregator::new();
    let mut lines_read = 0u64;
    let mut lines_matched = 0u64;

    for line_result in reader.lines() {
        let line_number = lines_read + 1;
        let line = line_result.map_err(|source| SlaError::Read {
            source_name: source_name.to_string(),
            line_number,
            source,
        })?;
        lines_read = line_number;

        let Some(event) = parse_event(&line, line_number)? else {
            continue;
        };
        lines_matched += 1;
        trace!("line {}: client {}", event.line_number, event.client_index);
        aggregator.observe(event.client_index);
    }

    let (histogram, runs) = aggregator.finish();
    let stats = ScanStats {
        lines_read,
        lines_matched,
        runs,
    };

    debug!(
        "{}: {} read, {} matched, {} runs ({} recorded, {} discarded)",
        source_name,
        stats.lines_read,
        stats.lines_matched,
        stats.runs.runs_total,
        stats.runs.runs_recorded,
        stats.runs.runs_discarded,
    );

    Ok(ScanOutput { histogram, stats })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
