// Calendar day value type shared by every workload computation.
//
// Purpose
// - Hold a day as (year, month, day) with no time-of-day and no zone attached.
//
// Parsing rules
// - "yyyy-MM-dd" is taken as authored. It is never read as a UTC instant.
// - RFC 3339 timestamps carrying an offset are moved to the local zone, then truncated.
// - Timestamps without an offset are local wall-clock times and are truncated as-is.
//
// Boundaries
// - The textual form at every boundary is "yyyy-MM-dd".
// - A DateRange spans at most MAX_RANGE_DAYS days.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const CALENDAR_DAY_FORMAT: &str = "%Y-%m-%d";

/// Longest inclusive range accepted, three years including a leap day.
pub const MAX_RANGE_DAYS: i64 = 3 * 365 + 1;

const LOCAL_TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarDayError {
    #[error("invalid calendar day: {0:?}")]
    Invalid(String),

    #[error("range end {end} is before start {start}")]
    InvertedRange { start: CalendarDay, end: CalendarDay },

    #[error("calendar day out of range")]
    OutOfRange,

    #[error("range of {days} days exceeds the maximum of {max}")]
    RangeTooLong { days: i64, max: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarDayError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| CalendarDayError::Invalid(format!("{year:04}-{month:02}-{day:02}")))
    }

    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn parse(input: &str) -> Result<Self, CalendarDayError> {
        let trimmed = input.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, CALENDAR_DAY_FORMAT) {
            return Ok(Self(date));
        }
        if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(instant.with_timezone(&Local).date_naive()));
        }
        LOCAL_TIMESTAMP_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .map(|local| Self(local.date()))
            .ok_or_else(|| CalendarDayError::Invalid(input.to_string()))
    }

    /// Parses an optional query/body value, treating blank strings as absent.
    pub fn parse_opt(input: Option<&str>) -> Result<Option<Self>, CalendarDayError> {
        match input.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => Self::parse(value).map(Some),
        }
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    pub fn is_weekend(&self) -> bool {
        self.0.weekday().number_from_monday() >= 6
    }

    pub fn monday_of_week(&self) -> Self {
        let offset = u64::from(self.0.weekday().num_days_from_monday());
        Self(self.0.checked_sub_days(Days::new(offset)).unwrap_or(self.0))
    }

    pub fn add_days(&self, days: u64) -> Result<Self, CalendarDayError> {
        self.0
            .checked_add_days(Days::new(days))
            .map(Self)
            .ok_or(CalendarDayError::OutOfRange)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &CalendarDay) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CALENDAR_DAY_FORMAT))
    }
}

impl FromStr for CalendarDay {
    type Err = CalendarDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDay {
    type Error = CalendarDayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CalendarDay> for String {
    fn from(day: CalendarDay) -> Self {
        day.to_string()
    }
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: CalendarDay,
    end: CalendarDay,
}

impl DateRange {
    pub fn new(start: CalendarDay, end: CalendarDay) -> Result<Self, CalendarDayError> {
        if end < start {
            return Err(CalendarDayError::InvertedRange { start, end });
        }
        let days = start.days_until(&end) + 1;
        if days > MAX_RANGE_DAYS {
            return Err(CalendarDayError::RangeTooLong {
                days,
                max: MAX_RANGE_DAYS,
            });
        }
        Ok(Self { start, end })
    }

    pub fn single(day: CalendarDay) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Monday through Sunday of the week containing `day`.
    pub fn week_of(day: CalendarDay) -> Result<Self, CalendarDayError> {
        let start = day.monday_of_week();
        Self::new(start, start.add_days(6)?)
    }

    pub fn start(&self) -> CalendarDay {
        self.start
    }

    pub fn end(&self) -> CalendarDay {
        self.end
    }

    pub fn len_days(&self) -> usize {
        (self.start.days_until(&self.end) + 1) as usize
    }

    pub fn contains(&self, day: &CalendarDay) -> bool {
        self.start <= *day && *day <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = CalendarDay> + use<> {
        self.start
            .0
            .iter_days()
            .take(self.len_days())
            .map(CalendarDay)
    }
}
