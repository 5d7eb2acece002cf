//! In-memory trip tables and month/day filtering.

use std::path::Path;

use bikeshare_core::catalog::{City, DayFilter, FilterSelection, MonthFilter};
use bikeshare_core::models::{Trip, TripRecord};
use bikeshare_core::Result;
use tracing::debug;

use crate::reader::load_city_table;

// ── TripTable ─────────────────────────────────────────────────────────────────

/// Ordered trips for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    city: City,
    trips: Vec<Trip>,
}

impl TripTable {
    /// Build a table from source-ordered records, deriving calendar fields.
    pub fn new(city: City, records: Vec<TripRecord>) -> Self {
        let trips = records
            .into_iter()
            .enumerate()
            .map(|(row, record)| Trip::new(row, record))
            .collect();
        Self { city, trips }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Up to `size` trips starting at `start`; empty once `start` passes the end.
    pub fn page(&self, start: usize, size: usize) -> &[Trip] {
        let start = start.min(self.trips.len());
        let end = start.saturating_add(size).min(self.trips.len());
        &self.trips[start..end]
    }

    /// Keep trips in `month` and on `day`. Source order is preserved and
    /// `self` is left untouched.
    pub fn filter(&self, month: MonthFilter, day: DayFilter) -> TripTable {
        self.filter_month(month).filter_day(day)
    }

    pub fn filter_month(&self, month: MonthFilter) -> TripTable {
        self.select(|t| month.matches(t.month))
    }

    pub fn filter_day(&self, day: DayFilter) -> TripTable {
        self.select(|t| day.matches(t.day_of_week))
    }

    /// Whether every trip in `self` is also a row of `other`, matched by
    /// source row number. Both tables must be in source order, which every
    /// table built by [`TripTable::new`] or a filter is.
    pub fn is_subset_of(&self, other: &TripTable) -> bool {
        let mut rest = other.trips.iter();
        self.city == other.city
            && self
                .trips
                .iter()
                .all(|t| rest.any(|o| o.row == t.row && o == t))
    }

    fn select(&self, keep: impl Fn(&Trip) -> bool) -> TripTable {
        let trips = self.trips.iter().filter(|t| keep(t)).cloned().collect();
        TripTable {
            city: self.city,
            trips,
        }
    }
}

impl<'a> IntoIterator for &'a TripTable {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// The two tables produced by one analysis round.
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub selection: FilterSelection,
    /// Every trip for the city; feeds the raw data browser.
    pub unfiltered: TripTable,
    /// Trips matching the month and day selection; feeds the aggregators.
    pub filtered: TripTable,
    /// Wall-clock seconds spent reading and parsing the source file.
    pub load_time_seconds: f64,
}

/// Load `selection.city` from `data_dir` and apply the month/day filters.
pub fn load_data(data_dir: &Path, selection: FilterSelection) -> Result<LoadedData> {
    let load_start = std::time::Instant::now();
    let unfiltered = load_city_table(data_dir, selection.city)?;
    let load_time_seconds = load_start.elapsed().as_secs_f64();

    let filtered = unfiltered.filter(selection.month, selection.day);
    debug_assert!(filtered.is_subset_of(&unfiltered));
    debug!(
        "Loaded {} in {:.4}s; filtered by month={} day={}: {} of {} trips",
        selection.city,
        load_time_seconds,
        selection.month,
        selection.day,
        filtered.len(),
        unfiltered.len()
    );

    Ok(LoadedData {
        selection,
        unfiltered,
        filtered,
        load_time_seconds,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
