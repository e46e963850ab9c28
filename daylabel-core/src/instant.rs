//! Parsing timestamps from text

use crate::error::{Error, Result};
use crate::zone::Zone;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Naive formats tried in order; interpreted as wall-clock time in the zone.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DD[ HH:MM[:SS]]` in `zone`, or integer epoch
/// milliseconds. Blank input is the absent timestamp and returns `Ok(None)`.
pub fn parse_instant(input: &str, zone: &Zone) -> Result<Option<DateTime<Utc>>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }

    if let Ok(ms) = trimmed.parse::<i64>() {
        return match Utc.timestamp_millis_opt(ms).single() {
            Some(dt) => Ok(Some(dt)),
            None => Err(parse_error(trimmed, "epoch milliseconds out of range")),
        };
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| parse_error(trimmed, "unrecognized format"))?;

    zone.resolve_naive(naive)
        .map(Some)
        .ok_or_else(|| parse_error(trimmed, &format!("time does not exist in zone {}", zone)))
}

fn parse_error(input: &str, message: &str) -> Error {
    Error::Parse {
        input: input.to_string(),
        message: message.to_string(),
    }
}
