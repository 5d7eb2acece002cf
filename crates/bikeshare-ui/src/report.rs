//! Console rendering of the selection summary and statistic blocks.

use std::fmt::Display;
use std::io::{self, Write};

use bikeshare_core::formatting::format_decimal;
use bikeshare_core::time_utils::{month_name, weekday_name};
use bikeshare_core::Unavailable;
use bikeshare_data::aggregator::{
    BirthYear, BirthYearStats, Distribution, DurationStats, Stat, StationStats, TimeStats,
    UserStats,
};
use bikeshare_data::analysis::{Timed, TripReport};
use bikeshare_data::frequency::Share;
use bikeshare_data::table::LoadedData;

use crate::table_view::{render_counts, render_preview};

/// Line printed between blocks.
pub const SEPARATOR: &str = "----------------------------------------";

/// Rows shown at each end of the filtered-table preview.
const PREVIEW_EDGE: usize = 5;

// ── Selection summary ─────────────────────────────────────────────────────────

/// Confirm the applied filters and preview the filtered table.
pub fn render_selection<W: Write>(out: &mut W, data: &LoadedData) -> io::Result<()> {
    let s = &data.selection;
    writeln!(
        out,
        "\nAlright! You filtered {} data by {} month(s) and by {} day(s), \nHere is your filtered data\n",
        s.city, s.month, s.day
    )?;
    writeln!(out, "{}", render_preview(&data.filtered, PREVIEW_EDGE))?;
    writeln!(out, "{}", SEPARATOR)
}

// ── Full report ───────────────────────────────────────────────────────────────

/// Print all four statistic blocks in order.
pub fn render_report<W: Write>(out: &mut W, report: &TripReport) -> io::Result<()> {
    render_time_stats(out, &report.time)?;
    render_station_stats(out, &report.stations)?;
    render_duration_stats(out, &report.durations)?;
    render_user_stats(out, &report.users)
}

pub fn render_time_stats<W: Write>(out: &mut W, block: &Timed<TimeStats>) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let stats = &block.value;

    let month = stats.popular_month.clone().map(|s| s.map(month_name));
    writeln!(out, "{}", most_common("common month of travel", &month))?;

    let day = stats.popular_day.clone().map(|s| s.map(weekday_name));
    writeln!(out, "\n{}", most_common("common day of week of travel", &day))?;

    writeln!(out, "\n{}", most_common("common hour of travel", &stats.popular_hour))?;
    footer(out, block.elapsed_seconds)
}

pub fn render_station_stats<W: Write>(
    out: &mut W,
    block: &Timed<StationStats>,
) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let stats = &block.value;

    writeln!(
        out,
        "{}",
        most_common("commonly used start station", &stats.popular_start_station)
    )?;
    writeln!(
        out,
        "\n{}",
        most_common("commonly used end station", &stats.popular_end_station)
    )?;
    writeln!(
        out,
        "\n{}",
        most_common("commonly used start/end station", &stats.popular_trip)
    )?;
    footer(out, block.elapsed_seconds)
}

pub fn render_duration_stats<W: Write>(
    out: &mut W,
    block: &Timed<Stat<DurationStats>>,
) -> io::Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    match &block.value {
        Ok(stats) => {
            writeln!(
                out,
                "The total trips travel time is: {} hours.",
                format_decimal(stats.total_hours)
            )?;
            writeln!(
                out,
                "\nThe average trip travel time is: {} minutes.",
                format_decimal(stats.mean_minutes)
            )?;
        }
        Err(reason) => {
            writeln!(out, "Trip duration statistics are not available: {}.", reason)?;
        }
    }
    footer(out, block.elapsed_seconds)
}

pub fn render_user_stats<W: Write>(out: &mut W, block: &Timed<UserStats>) -> io::Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    let stats = &block.value;

    match &stats.user_types {
        Ok(dist) => writeln!(
            out,
            "The counts for each user type are:\n{}\n{}",
            render_counts(&dist.counts),
            leading_values(dist)
        )?,
        Err(reason) => writeln!(out, "User type statistics are not available: {}.", reason)?,
    }

    match &stats.gender {
        Ok(dist) => writeln!(
            out,
            "\nThe counts for each gender are:\n{}\n{}",
            render_counts(&dist.counts),
            leading_values(dist)
        )?,
        Err(reason) => writeln!(out, "\n{}", unavailable_sentence("Gender", reason))?,
    }

    match &stats.birth_years {
        Ok(years) => render_birth_years(out, years)?,
        Err(reason) => writeln!(out, "\n{}", unavailable_sentence("Birth year", reason))?,
    }

    footer(out, block.elapsed_seconds)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn render_birth_years<W: Write>(out: &mut W, years: &BirthYearStats) -> io::Result<()> {
    let line = |label: &str, by: &BirthYear| {
        format!(
            "\nThe {} year of birth is: {}, with an Age of {} years at the trip time!",
            label, by.year, by.age
        )
    };
    writeln!(out, "{}", line("oldest", &years.earliest))?;
    writeln!(out, "{}", line("youngest", &years.latest))?;
    writeln!(out, "{}", line("most common", &years.most_common))
}

fn most_common<T: Display>(what: &str, stat: &Stat<Share<T>>) -> String {
    match stat {
        Ok(share) => format!(
            "The most {} is: {}, recorded {}% of total.",
            what,
            share.value,
            format_decimal(share.percentage)
        ),
        Err(reason) => format!("The most {} is not available: {}.", what, reason),
    }
}

fn leading_values(dist: &Distribution) -> String {
    match &dist.second {
        Ok(second) => format!(
            "{} recorded {}% of total, while {} recorded {}% of total.",
            dist.first.value,
            format_decimal(dist.first.percentage),
            second.value,
            format_decimal(second.percentage)
        ),
        Err(_) => format!(
            "{} recorded {}% of total.",
            dist.first.value,
            format_decimal(dist.first.percentage)
        ),
    }
}

fn unavailable_sentence(column: &str, reason: &Unavailable) -> String {
    match reason {
        Unavailable::NotRecorded { .. } => {
            let mut s = reason.to_string();
            if let Some(first) = s.get(..1) {
                let upper = first.to_uppercase();
                s.replace_range(..1, &upper);
            }
            s
        }
        other => format!("{} statistics are not available: {}.", column, other),
    }
}

fn footer<W: Write>(out: &mut W, elapsed_seconds: f64) -> io::Result<()> {
    writeln!(out, "\nThis took {} seconds.", elapsed_seconds)?;
    writeln!(out, "{}", SEPARATOR)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::catalog::{City, DayFilter, FilterSelection, MonthFilter};
    use bikeshare_core::models::TripRecord;
    use bikeshare_core::time_utils::parse_start_time;
    use bikeshare_data::analysis::analyze_trips;
    use bikeshare_data::table::TripTable;
    use chrono::Month;

    fn record(ts: &str, user: &str, gender: Option<&str>, birth: Option<i32>) -> TripRecord {
        TripRecord {
            start_time: parse_start_time(ts).unwrap(),
            end_time: None,
            trip_duration: Some(900.0),
            start_station: "Clark St & Lake St".to_string(),
            end_station: "Franklin St & Monroe St".to_string(),
            user_type: Some(user.to_string()),
            gender: gender.map(str::to_string),
            birth_year: birth,
        }
    }

    fn render(table: &TripTable) -> String {
        let mut out = Vec::new();
        render_report(&mut out, &analyze_trips(table)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_with_demographics() {
        let table = TripTable::new(
            City::Chicago,
            vec![
                record("2017-06-05 08:00:00", "Subscriber", Some("Male"), Some(1980)),
                record("2017-06-05 08:30:00", "Customer", Some("Female"), Some(1995)),
                record("2017-06-06 09:00:00", "Subscriber", Some("Male"), Some(1980)),
                record("2017-06-06 18:00:00", "Subscriber", None, None),
            ],
        );
        let out = render(&table);

        assert!(out.contains("The most common month of travel is: June, recorded 100.0% of total."));
        assert!(out.contains("The most common hour of travel is: 8, recorded 50.0% of total."));
        assert!(out.contains(
            "The most commonly used start/end station is: Clark St & Lake St --- Franklin St & Monroe St, recorded 100.0% of total."
        ));
        assert!(out.contains("The total trips travel time is: 1.0 hours."));
        assert!(out.contains("The average trip travel time is: 15.0 minutes."));
        assert!(out.contains("Subscriber recorded 75.0% of total, while Customer recorded 25.0% of total."));
        assert!(out.contains("Male recorded 66.67% of total, while Female recorded 33.33% of total."));
        assert!(out.contains("The oldest year of birth is: 1980, with an Age of 37 years at the trip time!"));
        assert!(out.contains("The youngest year of birth is: 1995, with an Age of 22 years at the trip time!"));
        assert_eq!(out.matches("This took ").count(), 4);
    }

    #[test]
    fn test_report_without_demographics() {
        let table = TripTable::new(
            City::Washington,
            vec![record("2017-06-05 08:00:00", "Subscriber", None, None)],
        );
        let out = render(&table);

        assert!(out.contains("There is no available gender data for Washington"));
        assert!(out.contains("There is no available birth year data for Washington"));
        // Only one user type: reduced sentence without a second value.
        assert!(out.contains("Subscriber recorded 100.0% of total.\n"));
        assert!(!out.contains("while"));
    }

    #[test]
    fn test_report_empty_table() {
        let out = render(&TripTable::new(City::NewYorkCity, vec![]));

        assert!(out.contains("The most common month of travel is not available: no data."));
        assert!(out.contains("Trip duration statistics are not available: no data."));
        assert!(out.contains("User type statistics are not available: no data."));
        assert!(out.contains("Gender statistics are not available: no data."));
    }

    #[test]
    fn test_render_selection() {
        let table = TripTable::new(
            City::NewYorkCity,
            vec![record("2017-06-05 08:00:00", "Subscriber", None, None)],
        );
        let data = LoadedData {
            selection: FilterSelection {
                city: City::NewYorkCity,
                month: MonthFilter::Only(Month::June),
                day: DayFilter::All,
            },
            unfiltered: table.clone(),
            filtered: table,
            load_time_seconds: 0.0,
        };

        let mut out = Vec::new();
        render_selection(&mut out, &data).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("You filtered New York City data by June month(s) and by All day(s)"));
        assert!(out.contains("[1 rows x 10 columns]"));
        assert!(out.ends_with(&format!("{}\n", SEPARATOR)));
    }
}
