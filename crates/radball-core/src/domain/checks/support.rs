//! Shared predicates: blankness, lengths, formats, dates.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use super::CheckContext;
use crate::domain::result::ValidationResult;
use crate::domain::rules::Rule;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s+()\-]{8,20}$").expect("valid regex"));

static ALPHANUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid regex"));

/// Empty or whitespace only.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Length in characters of the raw, untrimmed value.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// An optional value that was actually supplied. `Some("")` counts as absent.
pub(crate) fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

pub(crate) fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub(crate) fn is_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

pub(crate) fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC_RE.is_match(value)
}

/// Required text with an upper length bound.
///
/// Blank reports `required`; otherwise a raw length above `max` reports
/// `too_long`. At most one of the two fires.
pub(crate) fn required_text(
    ctx: &CheckContext<'_>,
    result: &mut ValidationResult,
    value: &str,
    max: usize,
    required: Rule,
    too_long: Rule,
) {
    if is_blank(value) {
        ctx.report(result, required);
    } else if char_len(value) > max {
        ctx.report(result, too_long);
    }
}

/// Parse a date or timestamp the way the API transports them.
///
/// Accepts a calendar date (`2030-06-20`, midnight UTC), an RFC 3339 timestamp
/// and a naive `YYYY-MM-DDTHH:MM:SS` timestamp (taken as UTC). Anything else,
/// including the empty string, is `None`.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    let naive = value.strip_suffix('Z').unwrap_or(value);
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .map(|dt| dt.and_utc())
}
