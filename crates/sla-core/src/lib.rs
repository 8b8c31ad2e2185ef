//! Shared types for the SLA change analysis: errors, domain models, CLI
//! settings and report formatting.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{Result, SlaError};
