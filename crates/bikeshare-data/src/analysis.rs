//! Statistics pipeline for one analysis round.
//!
//! Runs the four aggregators over the filtered table and records how long
//! each took, returning a [`TripReport`] ready for display.

use std::time::Instant;

use crate::aggregator::{DurationStats, Stat, StationStats, TimeStats, TripAggregator, UserStats};
use crate::table::TripTable;

// ── Public types ──────────────────────────────────────────────────────────────

/// A computed block plus the wall-clock seconds spent computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed_seconds: f64,
}

/// The complete output of [`analyze_trips`].
#[derive(Debug, Clone, PartialEq)]
pub struct TripReport {
    pub time: Timed<TimeStats>,
    pub stations: Timed<StationStats>,
    pub durations: Timed<Stat<DurationStats>>,
    pub users: Timed<UserStats>,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run every statistic block over `filtered`.
///
/// Never fails: blocks that cannot be computed carry an `Unavailable`
/// reason instead.
pub fn analyze_trips(filtered: &TripTable) -> TripReport {
    let time = timed(|| TripAggregator::time_stats(filtered));
    let stations = timed(|| TripAggregator::station_stats(filtered));
    let durations = timed(|| TripAggregator::duration_stats(filtered));
    let users = timed(|| TripAggregator::user_stats(filtered));

    tracing::debug!(
        "Analysed {} trips in {:.4}s",
        filtered.len(),
        time.elapsed_seconds
            + stations.elapsed_seconds
            + durations.elapsed_seconds
            + users.elapsed_seconds
    );

    TripReport {
        time,
        stations,
        durations,
        users,
    }
}

fn timed<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed_seconds: start.elapsed().as_secs_f64(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::catalog::City;
    use bikeshare_core::models::TripRecord;
    use bikeshare_core::time_utils::parse_start_time;
    use bikeshare_core::Unavailable;

    fn record(ts: &str, duration: f64) -> TripRecord {
        TripRecord {
            start_time: parse_start_time(ts).unwrap(),
            end_time: None,
            trip_duration: Some(duration),
            start_station: "Start".to_string(),
            end_station: "End".to_string(),
            user_type: Some("Customer".to_string()),
            gender: None,
            birth_year: None,
        }
    }

    #[test]
    fn test_analyze_trips_populates_every_block() {
        let table = TripTable::new(
            City::Washington,
            vec![
                record("2017-04-03 07:00:00", 120.0),
                record("2017-04-04 07:30:00", 240.0),
            ],
        );
        let report = analyze_trips(&table);

        assert!(report.time.value.popular_month.is_ok());
        assert!(report.stations.value.popular_trip.is_ok());
        assert_eq!(report.durations.value.as_ref().unwrap().mean_minutes, 3.0);
        assert!(report.users.value.user_types.is_ok());
        assert!(report.time.elapsed_seconds >= 0.0);
    }

    #[test]
    fn test_analyze_trips_empty_table() {
        let report = analyze_trips(&TripTable::new(City::Chicago, vec![]));

        assert_eq!(report.durations.value, Err(Unavailable::NoData));
        assert_eq!(report.time.value.popular_hour, Err(Unavailable::NoData));
        assert_eq!(report.users.value.birth_years, Err(Unavailable::NoData));
    }
}
