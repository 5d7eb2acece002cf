//! Descriptive statistics over a (filtered) trip table.
//!
//! Four independent passes: time of travel, stations, trip duration and
//! users. Each statistic that cannot be computed is reported as
//! [`Unavailable`] rather than failing the whole pass.

use chrono::{Month, Weekday};

use bikeshare_core::formatting::round_to;
use bikeshare_core::Unavailable;

use crate::frequency::{Share, ValueCounts};
use crate::table::TripTable;

/// A statistic or the reason it is missing.
pub type Stat<T> = Result<T, Unavailable>;

// ── Result types ──────────────────────────────────────────────────────────────

/// Most frequent month, weekday and start hour.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    pub popular_month: Stat<Share<Month>>,
    pub popular_day: Stat<Share<Weekday>>,
    pub popular_hour: Stat<Share<u32>>,
}

/// Most frequent start station, end station and start/end route.
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub popular_start_station: Stat<Share<String>>,
    pub popular_end_station: Stat<Share<String>>,
    /// Route label is `"<start> --- <end>"`.
    pub popular_trip: Stat<Share<String>>,
}

/// Total and mean trip duration.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    /// Trips with a recorded duration.
    pub trip_count: usize,
    /// Unrounded sum of all durations in seconds.
    pub total_seconds: f64,
    /// `total_seconds / 3600`, rounded to two decimals.
    pub total_hours: f64,
    /// Mean duration / 60, rounded to two decimals.
    pub mean_minutes: f64,
}

/// Frequency table of a categorical column plus its two leading values.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    /// `(value, count)`, most frequent first.
    pub counts: Vec<(String, usize)>,
    pub first: Share<String>,
    /// [`Unavailable::SingleCategory`] when only one distinct value exists.
    pub second: Stat<Share<String>>,
}

/// A birth year with the rider's age in the trip year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYear {
    pub year: i32,
    pub age: i32,
}

/// Oldest, youngest and most common birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    /// Most frequent year among trip start times; ages are relative to it.
    pub trip_year: i32,
    pub earliest: BirthYear,
    pub latest: BirthYear,
    pub most_common: BirthYear,
}

/// User type, gender and birth-year statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: Stat<Distribution>,
    pub gender: Stat<Distribution>,
    pub birth_years: Stat<BirthYearStats>,
}

// ── TripAggregator ────────────────────────────────────────────────────────────

/// Stateless helper computing each statistic block from a [`TripTable`].
pub struct TripAggregator;

impl TripAggregator {
    /// Most frequent month, day of week and start hour, with shares.
    pub fn time_stats(table: &TripTable) -> TimeStats {
        // Months and weekdays are counted by ordinal so ties resolve in
        // calendar order.
        let months = ValueCounts::from_values(table.iter().map(|t| t.month.number_from_month()));
        let days =
            ValueCounts::from_values(table.iter().map(|t| t.day_of_week.num_days_from_monday()));
        let hours = ValueCounts::from_values(table.iter().map(|t| t.hour));

        TimeStats {
            popular_month: months.top_share().map(|s| s.map(month_from_ordinal)),
            popular_day: days.top_share().map(|s| s.map(weekday_from_ordinal)),
            popular_hour: hours.top_share(),
        }
    }

    /// Most popular stations and start/end combination, with shares.
    pub fn station_stats(table: &TripTable) -> StationStats {
        let starts = ValueCounts::from_values(table.iter().map(|t| t.record.start_station.clone()));
        let ends = ValueCounts::from_values(table.iter().map(|t| t.record.end_station.clone()));
        let routes = ValueCounts::from_values(table.iter().map(|t| t.station_pair()));

        StationStats {
            popular_start_station: starts.top_share(),
            popular_end_station: ends.top_share(),
            popular_trip: routes.top_share(),
        }
    }

    /// Total travel time in hours and mean travel time in minutes, over the
    /// trips whose duration is recorded.
    pub fn duration_stats(table: &TripTable) -> Stat<DurationStats> {
        let (trip_count, total_seconds) = table
            .iter()
            .filter_map(|t| t.record.trip_duration)
            .fold((0usize, 0.0f64), |(n, sum), d| (n + 1, sum + d));
        if trip_count == 0 {
            return Err(Unavailable::NoData);
        }

        let mean_seconds = total_seconds / trip_count as f64;

        Ok(DurationStats {
            trip_count,
            total_seconds,
            total_hours: round_to(total_seconds / 3600.0, 2),
            mean_minutes: round_to(mean_seconds / 60.0, 2),
        })
    }

    /// User type distribution and, where recorded, gender and birth years.
    pub fn user_stats(table: &TripTable) -> UserStats {
        let user_types = distribution(
            table.iter().map(|t| t.record.user_type.clone()),
            "user type",
        );

        let city = table.city();
        let not_recorded = |column: &'static str| Unavailable::NotRecorded {
            column,
            city: city.display_name(),
        };

        let (gender, birth_years) = if city.has_demographics() {
            (
                distribution(table.iter().map(|t| t.record.gender.clone()), "gender"),
                birth_year_stats(table),
            )
        } else {
            (Err(not_recorded("gender")), Err(not_recorded("birth year")))
        };

        UserStats {
            user_types,
            gender,
            birth_years,
        }
    }
}

// ── Private helpers ───────────────────────────────────────────────────────────

fn distribution(
    column: impl IntoIterator<Item = Option<String>>,
    label: &'static str,
) -> Stat<Distribution> {
    let counts = ValueCounts::from_column(column);
    let first = counts.top_share()?;
    let second = counts
        .share_at(1)
        .ok_or(Unavailable::SingleCategory(label));

    Ok(Distribution {
        counts: counts.ranked().to_vec(),
        first,
        second,
    })
}

fn birth_year_stats(table: &TripTable) -> Stat<BirthYearStats> {
    let years = ValueCounts::from_column(table.iter().map(|t| t.record.birth_year));
    let most_common = *years.mode()?;

    let mut present = table.iter().filter_map(|t| t.record.birth_year);
    let first = present.next().ok_or(Unavailable::NoData)?;
    let (earliest, latest) = present.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));

    let trip_year = *ValueCounts::from_values(table.iter().map(|t| t.year())).mode()?;
    let at = |year: i32| BirthYear {
        year,
        age: trip_year - year,
    };

    Ok(BirthYearStats {
        trip_year,
        earliest: at(earliest),
        latest: at(latest),
        most_common: at(most_common),
    })
}

fn month_from_ordinal(n: u32) -> Month {
    u8::try_from(n)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .unwrap_or(Month::January)
}

fn weekday_from_ordinal(n: u32) -> Weekday {
    const ORDER: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];
    ORDER[(n % 7) as usize]
}

// ── Tests ─────────────────────────────────────────────────────────────────────
