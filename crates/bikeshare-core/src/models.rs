use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};

use crate::time_utils::month_of;

/// Separator placed between start and end station when counting trips by route.
pub const STATION_PAIR_SEPARATOR: &str = " --- ";

/// A single rental read from a city's trip file.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Local wall-clock time the rental started.
    pub start_time: NaiveDateTime,
    /// Local wall-clock time the bike was returned, when recorded.
    pub end_time: Option<NaiveDateTime>,
    /// Trip length in seconds; `None` when the cell is blank.
    pub trip_duration: Option<f64>,
    pub start_station: String,
    pub end_station: String,
    /// `"Subscriber"`, `"Customer"`, ... ; blank cells are `None`.
    pub user_type: Option<String>,
    /// Only present for cities that record demographics.
    pub gender: Option<String>,
    /// Only present for cities that record demographics.
    pub birth_year: Option<i32>,
}

/// A [`TripRecord`] plus the calendar fields derived from its start time.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Zero-based position in the source file; identifies the row across
    /// the unfiltered and filtered tables.
    pub row: usize,
    pub record: TripRecord,
    pub month: Month,
    pub day_of_week: Weekday,
    /// Start hour, 0-23.
    pub hour: u32,
}

impl Trip {
    /// Derive the calendar fields for `record` found at `row`.
    pub fn new(row: usize, record: TripRecord) -> Self {
        let month = month_of(&record.start_time);
        let day_of_week = record.start_time.weekday();
        let hour = record.start_time.hour();
        Self {
            row,
            record,
            month,
            day_of_week,
            hour,
        }
    }

    /// Year component of the start timestamp.
    pub fn year(&self) -> i32 {
        self.record.start_time.year()
    }

    /// `"<start> --- <end>"` route label.
    pub fn station_pair(&self) -> String {
        format!(
            "{}{}{}",
            self.record.start_station, STATION_PAIR_SEPARATOR, self.record.end_station
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_utils::parse_start_time;

    fn record(ts: &str) -> TripRecord {
        TripRecord {
            start_time: parse_start_time(ts).unwrap(),
            end_time: None,
            trip_duration: Some(600.0),
            start_station: "Canal St & Adams St".to_string(),
            end_station: "Clinton St & Madison St".to_string(),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
        }
    }

    #[test]
    fn test_trip_derives_calendar_fields() {
        // 2017-03-06 was a Monday.
        let trip = Trip::new(4, record("2017-03-06 17:45:00"));
        assert_eq!(trip.row, 4);
        assert_eq!(trip.month, Month::March);
        assert_eq!(trip.day_of_week, Weekday::Mon);
        assert_eq!(trip.hour, 17);
        assert_eq!(trip.year(), 2017);
    }

    #[test]
    fn test_station_pair() {
        let trip = Trip::new(0, record("2017-03-06 17:45:00"));
        assert_eq!(
            trip.station_pair(),
            "Canal St & Adams St --- Clinton St & Madison St"
        );
    }
}
