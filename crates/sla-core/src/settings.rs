use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{Result, SlaError};

// ── OutputFormat ───────────────────────────────────────────────────────────────

/// How the histogram is written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<changes> <clients>` per line, ascending, no header
    #[default]
    Text,
    /// Pretty-printed JSON report including scan metadata
    Json,
}

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Per-client SLA change histogram for `[sla]` trace logs
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sla-changes",
    about = "Per-client SLA change histogram for [sla] trace logs",
    version
)]
pub struct Settings {
    /// Path to the input log file
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Logging level
    #[arg(
        long,
        env = "SLA_LOG_LEVEL",
        default_value = "WARNING",
        value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"]
    )]
    pub log_level: String,

    /// Log file path (diagnostics go to stderr when unset)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments.
    pub fn load() -> Result<Self> {
        Self::from_args(std::env::args_os())
    }

    /// Parse an explicit argument list (the first item is the program name).
    ///
    /// Any argument error, as well as `--help` and `--version`, surfaces as
    /// [`SlaError::Usage`] carrying the text clap rendered for it.
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut settings = Settings::try_parse_from(args)
            .map_err(|e| SlaError::Usage(e.render().to_string().trim_end().to_string()))?;

        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }

        Ok(settings)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
