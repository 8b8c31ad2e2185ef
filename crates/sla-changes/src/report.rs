use std::io::Write;

use sla_core::formatting::{format_histogram, format_json};
use sla_core::settings::OutputFormat;
use sla_core::Result;
use sla_data::analysis::AnalysisResult;

/// Write the finished analysis to `out` in the requested format.
pub fn write_report<W: Write>(
    result: &AnalysisResult,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => format_histogram(&result.histogram),
        OutputFormat::Json => format_json(result)?,
    };
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sla_data::analysis::analyze_reader;
    use std::io::Cursor;

    const SCENARIO: &str =
        "[sla] 1 start\n[sla] 1 change\n[sla] 1 end\n[sla] 2 start\n[sla] 2 end\n";

    fn render(input: &str, format: OutputFormat) -> String {
        let result = analyze_reader(Cursor::new(input), "test").unwrap();
        let mut out = Vec::new();
        write_report(&result, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_report_scenario() {
        assert_eq!(render(SCENARIO, OutputFormat::Text), "1 1\n2 1\n");
    }

    #[test]
    fn test_text_report_empty_when_nothing_matches() {
        assert_eq!(render("nothing here\n", OutputFormat::Text), "");
    }

    #[test]
    fn test_json_report_contains_histogram_and_metadata() {
        let out = render(SCENARIO, OutputFormat::Json);
        assert!(out.contains("\"histogram\""));
        assert!(out.contains("\"metadata\""));
        assert!(out.contains("\"runs_recorded\": 2"));
    }
}
