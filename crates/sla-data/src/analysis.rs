//! Top-level analysis pipeline.
//!
//! Wraps a scan with timing and provenance, returning an [`AnalysisResult`]
//! ready for the report layer.

use std::io::BufRead;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sla_core::models::Histogram;
use sla_core::Result;
use tracing::info;

use crate::reader::{open_input, scan_lines, ScanOutput, ScanStats};

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the histogram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Name of the analysed input (file path or caller-supplied label).
    pub source: String,
    /// RFC 3339 timestamp when this result was generated.
    pub generated_at: String,
    #[serde(flatten)]
    pub stats: ScanStats,
    /// Wall-clock seconds spent scanning the input.
    pub scan_time_seconds: f64,
}

/// The complete output of [`analyze_file`] / [`analyze_reader`].
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub histogram: Histogram,
    pub metadata: AnalysisMetadata,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the analysis over the log file at `path`.
pub fn analyze_file(path: &Path) -> Result<AnalysisResult> {
    let reader = open_input(path)?;
    analyze_reader(reader, &path.display().to_string())
}

/// Run the analysis over an already-open buffered reader.
pub fn analyze_reader<R: BufRead>(reader: R, source: &str) -> Result<AnalysisResult> {
    let scan_start = std::time::Instant::now();
    let ScanOutput { histogram, stats } = scan_lines(reader, source)?;
    let scan_time = scan_start.elapsed().as_secs_f64();

    info!(
        "Analysed {}: {} distinct change counts, {} changes over {} recorded runs",
        source,
        histogram.len(),
        histogram.total_changes(),
        histogram.total_runs()
    );

    Ok(AnalysisResult {
        histogram,
        metadata: AnalysisMetadata {
            source: source.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            stats,
            scan_time_seconds: scan_time,
        },
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
