mod bootstrap;
mod report;

use anyhow::{Context, Result};
use sla_core::settings::Settings;
use sla_core::SlaError;
use sla_data::analysis::analyze_file;

fn main() -> Result<()> {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(SlaError::Usage(message)) => {
            // Wrong invocation is not a failure: show usage and stop.
            println!("{}", message);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_deref())?;

    tracing::info!("sla-changes v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        "Input: {}, format: {:?}",
        settings.path.display(),
        settings.format
    );

    let result = analyze_file(&settings.path)?;

    let stdout = std::io::stdout();
    report::write_report(&result, settings.format, &mut stdout.lock())
        .context("Error while writing report to stdout")?;

    Ok(())
}
