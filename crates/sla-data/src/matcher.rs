//! Recognition of `[sla] <client-index> ...` trace lines.

use std::sync::OnceLock;

use regex::Regex;
use sla_core::models::{ClientIndex, SlaEvent};
use sla_core::{Result, SlaError};

/// Tag, one space, the client index token, one space, free-form remainder.
const SLA_LINE_PATTERN: &str = r"^\[sla\] (\S+) ";

fn sla_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SLA_LINE_PATTERN).expect("regex is valid"))
}

/// Return the client index token of an `[sla]` line, or `None` when the line
/// is not an SLA event.
pub fn match_client_token(line: &str) -> Option<&str> {
    sla_line_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse `line` into an [`SlaEvent`].
///
/// * `Ok(None)` – the line is not an SLA event and must be ignored. Signed
///   tokens such as `-1` or `+1` fall in this group.
/// * `Err(SlaError::Parse)` – the line is tagged `[sla]` but its client index
///   is not an integer.
pub fn parse_event(line: &str, line_number: u64) -> Result<Option<SlaEvent>> {
    let Some(token) = match_client_token(line) else {
        return Ok(None);
    };
    if token.starts_with(['-', '+']) {
        return Ok(None);
    }

    let client_index: ClientIndex = token.parse().map_err(|source| SlaError::Parse {
        line_number,
        token: token.to_string(),
        source,
    })?;

    Ok(Some(SlaEvent {
        line_number,
        client_index,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_kitty_style_line() {
        let line = "[sla] 12 1431472800 71 1.2      ok";
        assert_eq!(match_client_token(line), Some("12"));
    }

    #[test]
    fn test_trailing_content_may_be_empty() {
        assert_eq!(match_client_token("[sla] 4 "), Some("4"));
    }

    #[test]
    fn test_requires_separator_after_index() {
        assert_eq!(match_client_token("[sla] 4"), None);
    }

    #[test]
    fn test_ignores_other_tags() {
        assert_eq!(match_client_token("[sla][offset] timestamp prediction"), None);
        assert_eq!(match_client_token("[info] 1 starting"), None);
        assert_eq!(match_client_token(""), None);
    }

    #[test]
    fn test_tag_must_start_the_line() {
        assert_eq!(match_client_token(" [sla] 1 start"), None);
        assert_eq!(match_client_token("x [sla] 1 start"), None);
    }

    #[test]
    fn test_double_space_does_not_match() {
        assert_eq!(match_client_token("[sla]  1 start"), None);
    }

    #[test]
    fn test_parse_event_ok() {
        let event = parse_event("[sla] 42 change", 9).unwrap().unwrap();
        assert_eq!(event.client_index, 42);
        assert_eq!(event.line_number, 9);
    }

    #[test]
    fn test_parse_event_zero_index() {
        let event = parse_event("[sla] 0 start", 1).unwrap().unwrap();
        assert_eq!(event.client_index, 0);
    }

    #[test]
    fn test_parse_event_non_matching_is_none() {
        assert!(parse_event("plain log line", 1).unwrap().is_none());
    }

    #[test]
    fn test_parse_event_non_numeric_index() {
        let err = parse_event("[sla] abc bad", 3).unwrap_err();
        match err {
            SlaError::Parse {
                line_number, token, ..
            } => {
                assert_eq!(line_number, 3);
                assert_eq!(token, "abc");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_event_negative_index_is_ignored() {
        assert!(parse_event("[sla] -1 start", 1).unwrap().is_none());
    }

    #[test]
    fn test_parse_event_plus_signed_index_is_ignored() {
        assert!(parse_event("[sla] +1 start", 1).unwrap().is_none());
    }

    #[test]
    fn test_parse_event_overflowing_index() {
        assert!(matches!(
            parse_event("[sla] 99999999999999999999999 start", 1),
            Err(SlaError::Parse { .. })
        ));
    }
}
