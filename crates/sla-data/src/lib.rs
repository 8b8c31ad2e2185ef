//! Scanning layer for the SLA change analysis.
//!
//! Responsible for recognising `[sla]` trace lines, grouping them into
//! per-client runs, building the change histogram and running the top-level
//! analysis pipeline.

pub mod aggregator;
pub mod analysis;
pub mod matcher;
pub mod reader;

pub use sla_core as core;
