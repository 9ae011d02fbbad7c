//! Parses a birth date/time written in local civil time for an IANA zone.
//!
//! Zone abbreviations such as "CST" are ambiguous across regions, so only IANA
//! identifiers are accepted for resolving the offset. The abbreviation is still
//! available for display, derived from the resolved zone.

use chrono::{DateTime, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Layout of birth times, e.g. `1977-04-05 11:58 AM`.
pub const PARSE_LAYOUT: &str = "%Y-%m-%d %I:%M %p";

/// chrono accepts short fields, signs and lowercase markers; the layout does not.
static LAYOUT_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{1,2}:[0-9]{2} (AM|PM)$")
        .expect("layout pattern is valid")
});

/// How far back to look for the offset in effect before a skipped local time.
const MAX_GAP_HOURS: i64 = 48;

#[derive(Debug, Error)]
pub enum ParseTimeError {
    #[error("unknown time zone {0}")]
    UnknownZone(String),

    #[error("cannot parse {input:?} as \"YYYY-MM-DD H:MM AM\"")]
    FormatMismatch {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
}

/// Parse date/time with an IANA time zone.
///
/// A local time that occurs twice (clocks turned back) resolves to the earlier
/// instant. A local time skipped by clocks turning forward is read with the
/// offset in effect before the jump, so `2:30 AM` on a spring-forward night
/// lands on `3:30 AM` daylight time.
pub fn parse_time(date: &str, zone: &str) -> Result<DateTime<Tz>, ParseTimeError> {
    let tz: Tz = zone
        .parse()
        .map_err(|_| ParseTimeError::UnknownZone(zone.to_string()))?;

    if !LAYOUT_SHAPE.is_match(date) {
        return Err(ParseTimeError::FormatMismatch {
            input: date.to_string(),
            source: None,
        });
    }

    let local = NaiveDateTime::parse_from_str(date, PARSE_LAYOUT).map_err(|source| {
        ParseTimeError::FormatMismatch {
            input: date.to_string(),
            source: Some(source),
        }
    })?;

    Ok(match tz.from_local_datetime(&local).earliest() {
        Some(when) => when,
        None => resolve_skipped(tz, local),
    })
}

fn resolve_skipped(tz: Tz, local: NaiveDateTime) -> DateTime<Tz> {
    let before = (1..=MAX_GAP_HOURS)
        .find_map(|h| tz.from_local_datetime(&(local - TimeDelta::hours(h))).latest())
        .map(|when| when.offset().fix())
        .unwrap_or_else(|| tz.offset_from_utc_datetime(&local).fix());

    let utc = local - TimeDelta::seconds(before.local_minus_utc().into());
    tz.from_utc_datetime(&utc)
}
