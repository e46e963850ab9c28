//! Calendar zone for day comparisons
//!
//! "Today" depends on where the reader is. A [`Zone`] picks the chrono time
//! zone that calendar days are computed in and dispatches labeling into it,
//! so callers can keep instants as `DateTime<Utc>`.

use crate::error::{Error, Result};
use crate::format::DateLabeler;
use crate::sections::Section;
use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Time zone whose calendar decides day boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Zone {
    /// The system's local time zone
    #[default]
    Local,
    Utc,
    /// A fixed UTC offset, e.g. `+02:00`
    Fixed(FixedOffset),
}

impl Zone {
    /// Label `target` relative to `now`, comparing calendar days in this zone.
    pub fn label(
        &self,
        labeler: &DateLabeler,
        target: Option<&DateTime<Utc>>,
        now: &DateTime<Utc>,
    ) -> String {
        match self {
            Zone::Local => labeler.label_at(target, &now.with_timezone(&Local)),
            Zone::Utc => labeler.label_at(target, now),
            Zone::Fixed(offset) => labeler.label_at(target, &now.with_timezone(offset)),
        }
    }

    /// Group `items` into day sections, comparing calendar days in this zone.
    pub fn sections<'a, T, F>(
        &self,
        labeler: &DateLabeler,
        items: &'a [T],
        now: &DateTime<Utc>,
        instant: F,
    ) -> Vec<Section<'a, T>>
    where
        F: Fn(&T) -> Option<DateTime<Utc>>,
    {
        match self {
            Zone::Local => labeler.sections_at(items, &now.with_timezone(&Local), instant),
            Zone::Utc => labeler.sections_at(items, now, instant),
            Zone::Fixed(offset) => labeler.sections_at(items, &now.with_timezone(offset), instant),
        }
    }

    /// Interpret a wall-clock time in this zone.
    ///
    /// Ambiguous local times (DST fall-back) resolve to the earlier instant;
    /// nonexistent ones (DST spring-forward gap) return `None`.
    pub fn resolve_naive(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Zone::Local => earliest(Local.from_local_datetime(&naive)),
            Zone::Utc => Some(Utc.from_utc_datetime(&naive)),
            Zone::Fixed(offset) => earliest(offset.from_local_datetime(&naive)),
        }
    }
}

fn earliest<Tz: TimeZone>(result: LocalResult<DateTime<Tz>>) -> Option<DateTime<Utc>> {
    match result {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Zone::Local),
            "utc" | "z" => Ok(Zone::Utc),
            other => parse_offset(other).map(Zone::Fixed).ok_or_else(|| {
                Error::Config(format!(
                    "unknown zone {:?} (expected \"local\", \"utc\" or an offset like \"+02:00\")",
                    s
                ))
            }),
        }
    }
}

impl TryFrom<String> for Zone {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => f.write_str("local"),
            Zone::Utc => f.write_str("utc"),
            Zone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

/// Parse `+HH:MM`, `-HHMM` or `+HH` into a fixed offset.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
