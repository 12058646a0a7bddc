//! Calendar date normalization
//!
//! Attendance and event dates are accepted as `YYYY-MM-DD`, optionally
//! followed by a time part (`T..` or ` ..`) which is discarded. A day past
//! the end of the month is clamped to the month's last day, so `2024-02-31`
//! becomes `2024-02-29`. The stored value is always midnight.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Canonical output form
const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A calendar day normalized to midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build from parts, clamping `day` to the month's last day
    pub fn from_parts(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidDate(format!("month out of range: {month}")));
        }
        if !(1..=31).contains(&day) {
            return Err(DomainError::InvalidDate(format!("day out of range: {day}")));
        }

        let day = day.min(days_in_month(year, month)?);
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Parse `YYYY-MM-DD[(T| )time]`
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let date_part = trimmed
            .split(['T', ' '])
            .next()
            .unwrap_or_default();

        let mut parts = date_part.splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(DomainError::InvalidDate(format!("expected YYYY-MM-DD, got '{trimmed}'")));
        };

        let invalid = || DomainError::InvalidDate(format!("expected YYYY-MM-DD, got '{trimmed}'"));
        if year.len() != 4 || !(1..=2).contains(&month.len()) || !(1..=2).contains(&day.len()) {
            return Err(invalid());
        }
        if ![year, month, day]
            .iter()
            .all(|part| part.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(invalid());
        }

        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        let day = day.parse::<u32>().map_err(|_| invalid())?;

        Self::from_parts(year, month, day)
    }

    /// The underlying date
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Midnight at the start of this day
    pub fn midnight(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }
}

fn days_in_month(year: i32, month: u32) -> Result<u32, DomainError> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .ok_or_else(|| DomainError::InvalidDate(format!("year out of range: {year}")))
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDateTime {
    fn from(date: CalendarDate) -> Self {
        date.midnight()
    }
}

impl FromStr for CalendarDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders as `YYYY-MM-DD 00:00:00`
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.midnight().format(CANONICAL_FORMAT))
    }
}
