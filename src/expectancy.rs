//! Projects how much of an expected lifespan is left.
//!
//! A year here is a fixed 365.25 days; no calendar arithmetic is done.

use chrono::{DateTime, TimeDelta, Utc};

const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 60.0 * 60.0;

/// Time from `now` until `birth + years`. Negative once the expectancy has passed.
///
/// Returns `None` when `years` is not finite or the end lies outside the
/// representable range.
pub fn remaining(birth: DateTime<Utc>, now: DateTime<Utc>, years: f64) -> Option<TimeDelta> {
    if !years.is_finite() {
        return None;
    }
    let span = TimeDelta::try_seconds((years * SECONDS_PER_YEAR) as i64)?;
    let end = birth.checked_add_signed(span)?;
    Some(end - now)
}
