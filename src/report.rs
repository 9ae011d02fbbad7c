use crate::age::Age;
use crate::birth::{ParseTimeError, parse_time};
use crate::clock::Clock;
use crate::expectancy;
use crate::subject::Subject;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;

/// Display format, e.g. `Tuesday, April 5, 1977 at 11:58 AM (PST)`.
pub const DATE_FORMAT: &str = "%A, %B %-d, %Y at %-I:%M %p (%Z)";

pub fn format_instant<T>(when: &DateTime<T>) -> String
where
    T: TimeZone,
    T::Offset: fmt::Display,
{
    when.format(DATE_FORMAT).to_string()
}

/// Zone used to show the current time: the system zone if it is a known IANA
/// name, else `fallback`.
pub fn display_zone(fallback: Tz) -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(name) => match name.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                eprintln!("Warning: unknown system time zone {name}, using {fallback}");
                fallback
            }
        },
        Err(e) => {
            eprintln!("Warning: failed to detect system time zone ({e}), using {fallback}");
            fallback
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Projection {
    Remaining { years: f64, left: Age },
    Outlived { years: f64, by: Age },
}

impl Projection {
    fn new(birth: DateTime<Utc>, now: DateTime<Utc>, years: f64) -> Option<Self> {
        let Some(left) = expectancy::remaining(birth, now, years) else {
            eprintln!("Warning: cannot project a life expectancy of {years} years");
            return None;
        };
        Some(if left < TimeDelta::zero() {
            Projection::Outlived {
                years,
                by: Age::from_duration(-left),
            }
        } else {
            Projection::Remaining {
                years,
                left: Age::from_duration(left),
            }
        })
    }
}

#[derive(Debug)]
pub struct Report {
    pub name: String,
    pub pronoun: String,
    pub now: DateTime<Tz>,
    pub birth: DateTime<Tz>,
    pub age: Age,
    pub projection: Option<Projection>,
}

impl Report {
    /// Shows "now" in `zone`, or when `None`, in the system zone with the
    /// birth zone as fallback.
    pub fn build(
        subject: &Subject,
        clock: &impl Clock,
        zone: Option<Tz>,
    ) -> Result<Self, ParseTimeError> {
        let birth = parse_time(&subject.birth_time, &subject.birth_zone)?;
        let zone = zone.unwrap_or_else(|| display_zone(birth.timezone()));
        let now = clock.now();
        let age = Age::from_duration(now - birth.with_timezone(&Utc));

        let projection = subject
            .life_expectancy_years
            .and_then(|years| Projection::new(birth.with_timezone(&Utc), now, years));

        Ok(Self {
            name: subject.name.clone(),
            pronoun: subject.pronoun.clone(),
            now: now.with_timezone(&zone),
            birth,
            age,
            projection,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The current time is {}", format_instant(&self.now))?;
        writeln!(f)?;
        writeln!(f, "{} was born on {}", self.name, format_instant(&self.birth))?;
        writeln!(f, "{} has been alive for {}.", self.pronoun, self.age)?;

        match &self.projection {
            Some(Projection::Remaining { years, left }) => writeln!(
                f,
                "{} has about {} left of an expected {} years.",
                self.pronoun, left, years
            ),
            Some(Projection::Outlived { years, by }) => writeln!(
                f,
                "{} has outlived an expected {} years by {}.",
                self.pronoun, years, by
            ),
            None => Ok(()),
        }
    }
}
