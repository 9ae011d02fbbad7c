//! age.rs
//!
//! This module splits an elapsed duration into:
//!     "W weeks, D days, H hours and M minutes"
//!
//! Every unit here has a fixed length, so unlike a year/month/day age there
//! is no calendar borrowing. Each step is a truncating division by the
//! next-larger unit, largest unit first.

use chrono::TimeDelta;
use std::fmt;

const MINUTES_PER_HOUR: f64 = 60.0;
const MINUTES_PER_DAY: f64 = MINUTES_PER_HOUR * 24.0;
const MINUTES_PER_WEEK: f64 = MINUTES_PER_DAY * 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Age {
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl Age {
    /// Decompose a duration into whole weeks, days, hours and minutes.
    pub fn from_duration(duration: TimeDelta) -> Self {
        let minutes = duration.num_milliseconds() as f64 / 60_000.0;

        let (weeks, minutes) = div_mod(minutes, MINUTES_PER_WEEK);
        let (days, minutes) = div_mod(minutes, MINUTES_PER_DAY);
        let (hours, minutes) = div_mod(minutes, MINUTES_PER_HOUR);

        Self {
            weeks: weeks as i64,
            days: days as i64,
            hours: hours as i64,
            minutes: minutes.trunc() as i64,
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} week{}, {} day{}, {} hour{} and {} minute{}",
            self.weeks,
            plural(self.weeks),
            self.days,
            plural(self.days),
            self.hours,
            plural(self.hours),
            self.minutes,
            plural(self.minutes)
        )
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Divides `x / y`, returning the truncated quotient and the remainder.
///
/// The remainder takes the sign of `x` (C `fmod`), not the Euclidean one.
/// A zero divisor is not an error: `div_mod(14.0, 0.0)` is `(inf, NaN)`.
pub fn div_mod(x: f64, y: f64) -> (f64, f64) {
    ((x / y).trunc(), x % y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_in_delta(msg: &str, expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() <= EPSILON,
            "expected {msg} {expected}, got {actual}"
        );
    }

    #[test]
    fn zero_duration_is_all_zero() {
        assert_eq!(Age::from_duration(TimeDelta::zero()), Age::default());
    }

    #[test]
    fn hour_and_ten_minutes() {
        let age = Age::from_duration(TimeDelta::hours(1) + TimeDelta::minutes(10));
        assert_eq!(
            age,
            Age {
                weeks: 0,
                days: 0,
                hours: 1,
                minutes: 10
            }
        );
    }

    #[test]
    fn seven_hundred_forty_six_hours() {
        let age = Age::from_duration(TimeDelta::hours(746));
        assert_eq!(
            age,
            Age {
                weeks: 4,
                days: 3,
                hours: 2,
                minutes: 0
            }
        );
    }

    #[test]
    fn seconds_are_truncated_not_rounded() {
        let age = Age::from_duration(TimeDelta::minutes(59) + TimeDelta::seconds(59));
        assert_eq!(age.hours, 0);
        assert_eq!(age.minutes, 59);
    }

    #[test]
    fn decomposition_is_repeatable() {
        let d = TimeDelta::days(17_000) + TimeDelta::minutes(123);
        assert_eq!(Age::from_duration(d), Age::from_duration(d));
    }

    #[test]
    fn negative_duration_does_not_panic() {
        let age = Age::from_duration(TimeDelta::minutes(-90));
        assert_eq!(age.weeks, 0);
        assert_eq!(age.hours, -1);
        assert_eq!(age.minutes, -30);
    }

    #[test]
    fn display_uses_singular_for_one() {
        let age = Age {
            weeks: 1,
            days: 2,
            hours: 1,
            minutes: 0,
        };
        assert_eq!(age.to_string(), "1 week, 2 days, 1 hour and 0 minutes");
    }

    #[test]
    fn div_mod_cases() {
        let cases = [
            (0.0, 1.0, 0.0, 0.0),
            (400.0, 10.0, 40.0, 0.0),
            (300.0, 44.0, 6.0, 36.0),
        ];
        for (x, y, quotient, remainder) in cases {
            let (q, r) = div_mod(x, y);
            assert_in_delta(&format!("{x}/{y} quotient"), quotient, q);
            assert_in_delta(&format!("{x}/{y} remainder"), remainder, r);
        }
    }

    #[test]
    fn div_mod_remainder_keeps_dividend_sign() {
        let (q, r) = div_mod(-7.0, 2.0);
        assert_in_delta("-7/2 quotient", -3.0, q);
        assert_in_delta("-7/2 remainder", -1.0, r);
    }

    #[test]
    fn div_mod_divide_by_zero() {
        let (q, r) = div_mod(14.0, 0.0);
        assert!(q.is_infinite() && q.is_sign_positive(), "quotient was {q}");
        assert!(r.is_nan(), "remainder was {r}");
    }
}
