//! Weekday label tables
//!
//! Days are indexed 0..=6 counting from Sunday. The label set is chosen by
//! configuration and never by the process locale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of buckets in a week
pub const DAYS_IN_WEEK: usize = 7;

const ENGLISH: [&str; DAYS_IN_WEEK] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const SPANISH: [&str; DAYS_IN_WEEK] = [
    "Domingo",
    "Lunes",
    "Martes",
    "Miercoles",
    "Jueves",
    "Viernes",
    "Sabado",
];

/// Label set used for weekday buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayLabels {
    #[default]
    English,
    Spanish,
}

impl WeekdayLabels {
    /// All seven labels, Sunday first
    pub const fn labels(self) -> &'static [&'static str; DAYS_IN_WEEK] {
        match self {
            Self::English => &ENGLISH,
            Self::Spanish => &SPANISH,
        }
    }

    /// Label for a day index counted from Sunday
    pub fn label(self, days_from_sunday: u32) -> Option<&'static str> {
        self.labels().get(days_from_sunday as usize).copied()
    }

    /// Short code used in configuration
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
        }
    }
}

impl fmt::Display for WeekdayLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned for an unknown label set name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weekday label set: {0}")]
pub struct UnknownLabelSet(pub String);

impl FromStr for WeekdayLabels {
    type Err = UnknownLabelSet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "es" | "spanish" => Ok(Self::Spanish),
            other => Err(UnknownLabelSet(other.to_string())),
        }
    }
}
