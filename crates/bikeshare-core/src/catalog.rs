//! Fixed enumerations for the bikeshare explorer: the city catalog, the
//! selectable months and the selectable weekdays.
//!
//! All three are closed sets known at build time. Parsing is
//! case-insensitive and ignores surrounding whitespace.

use std::fmt;
use std::str::FromStr;

use chrono::{Month, Weekday};

use crate::error::BikeshareError;
use crate::time_utils::{month_name, weekday_name};

/// City name → data file, in prompt order.
pub const CITY_DATA: [(&str, &str); 3] = [
    ("chicago", "chicago.csv"),
    ("new york city", "new_york_city.csv"),
    ("washington", "washington.csv"),
];

/// Accepted month answers. Trip data only covers the first half of the year.
pub const MONTHS: [&str; 7] = [
    "all", "january", "february", "march", "april", "may", "june",
];

/// Accepted day-of-week answers.
pub const DAYS: [&str; 8] = [
    "all",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn normalise(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Upper-case the first letter of every space-separated word.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ── City ──────────────────────────────────────────────────────────────────────

/// One of the supported cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    fn index(self) -> usize {
        match self {
            City::Chicago => 0,
            City::NewYorkCity => 1,
            City::Washington => 2,
        }
    }

    /// Lower-case catalog key, e.g. `"new york city"`.
    pub fn key(self) -> &'static str {
        CITY_DATA[self.index()].0
    }

    /// File name of the city's trip data inside the data directory.
    pub fn file_name(self) -> &'static str {
        CITY_DATA[self.index()].1
    }

    /// Title-form name for display, e.g. `"New York City"`.
    pub fn display_name(self) -> String {
        title_case(self.key())
    }

    /// Whether the city's source records `Gender` and `Birth Year`.
    pub fn has_demographics(self) -> bool {
        !matches!(self, City::Washington)
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalise(s);
        City::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or(BikeshareError::InvalidSelection {
                kind: "city",
                value: s.trim().to_string(),
            })
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

// ── MonthFilter ───────────────────────────────────────────────────────────────

/// Month selection: every month, or a single month from [`MONTHS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn matches(self, month: Month) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m == month,
        }
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalise(s);
        let invalid = || BikeshareError::InvalidSelection {
            kind: "month",
            value: s.trim().to_string(),
        };
        match MONTHS.iter().position(|m| *m == key) {
            Some(0) => Ok(MonthFilter::All),
            Some(n) => u8::try_from(n)
                .ok()
                .and_then(|n| Month::try_from(n).ok())
                .map(MonthFilter::Only)
                .ok_or_else(invalid),
            None => Err(invalid()),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("All"),
            MonthFilter::Only(m) => f.write_str(month_name(*m)),
        }
    }
}

// ── DayFilter ─────────────────────────────────────────────────────────────────

/// Day-of-week selection: every day, or a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn matches(self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => d == day,
        }
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalise(s);
        match DAYS.iter().position(|d| *d == key) {
            Some(0) => Ok(DayFilter::All),
            Some(n) => Ok(DayFilter::Only(WEEKDAYS[n - 1])),
            None => Err(BikeshareError::InvalidSelection {
                kind: "day",
                value: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("All"),
            DayFilter::Only(d) => f.write_str(weekday_name(*d)),
        }
    }
}

// ── FilterSelection ───────────────────────────────────────────────────────────

/// A validated city/month/day triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}


// ── Tests ──────────────────────────────────────────────────────────────────────
