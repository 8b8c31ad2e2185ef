use serde::Serialize;

use crate::error::Result;
use crate::models::Histogram;

/// Render the histogram as plain text, one `<changes> <clients>` line per key.
///
/// An empty histogram renders as an empty string.
///
/// # Examples
///
/// ```
/// use sla_core::formatting::format_histogram;
/// use sla_core::models::Histogram;
///
/// let mut h = Histogram::new();
/// h.record(2);
/// h.record(1);
/// assert_eq!(format_histogram(&h), "1 1\n2 1\n");
/// assert_eq!(format_histogram(&Histogram::new()), "");
/// ```
pub fn format_histogram(histogram: &Histogram) -> String {
    histogram
        .iter()
        .map(|(changes, clients)| format!("{} {}\n", changes, clients))
        .collect()
}

/// Render any report value as pretty-printed JSON with a trailing newline.
pub fn format_json<T: Serialize>(report: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_histogram_ascending_lines() {
        let mut h = Histogram::new();
        h.record(3);
        h.record(1);
        h.record(3);
        assert_eq!(format_histogram(&h), "1 1\n3 2\n");
    }

    #[test]
    fn test_format_histogram_empty() {
        assert!(format_histogram(&Histogram::new()).is_empty());
    }

    #[test]
    fn test_format_json_ends_with_newline() {
        let mut h = Histogram::new();
        h.record(1);
        let out = format_json(&h).unwrap();
        assert!(out.ends_with("]\n"));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["changes"], 1);
        assert_eq!(parsed[0]["clients"], 1);
    }
}
