// File: crates/chart-core/src/duration.rs
// Summary: Race-time parsing ("MM:SS" -> milliseconds) and duration tick formatting.

use crate::error::ChartError;
use crate::types::Millis;

const MILLIS_PER_MINUTE: Millis = 60_000;
const MILLIS_PER_SECOND: Millis = 1_000;

/// Parse a race time written as `"<minutes>:<seconds>"` into milliseconds.
///
/// Both parts must be non-empty runs of ASCII digits. Seconds of 60 or more are
/// accepted and simply added (`"1:75"` is 135 s).
pub fn parse_duration(s: &str) -> Result<Millis, ChartError> {
    let malformed = || ChartError::MalformedDuration(s.to_string());

    let (min_part, sec_part) = s.split_once(':').ok_or_else(malformed)?;
    if sec_part.contains(':') {
        return Err(malformed());
    }
    let minutes = parse_decimal(min_part).ok_or_else(malformed)?;
    let seconds = parse_decimal(sec_part).ok_or_else(malformed)?;
    if seconds >= 60 {
        tracing::warn!(time = s, seconds, "seconds field out of conventional range");
    }

    minutes
        .checked_mul(MILLIS_PER_MINUTE)
        .and_then(|m| seconds.checked_mul(MILLIS_PER_SECOND).and_then(|sec| m.checked_add(sec)))
        .ok_or_else(malformed)
}

// `str::parse` alone would also take a leading '+'.
fn parse_decimal(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Format a duration as `"<minutes>:<seconds>"` with seconds zero-padded to two digits.
///
/// Minutes are total minutes (no hour wrap); the sub-second part is dropped.
pub fn format_duration(ms: Millis) -> String {
    let minutes = ms / MILLIS_PER_MINUTE;
    let seconds = ms / MILLIS_PER_SECOND % 60;
    format!("{}:{:02}", minutes, seconds)
}
