//! CSV loading for per-city trip files.
//!
//! Reads `chicago.csv`, `new_york_city.csv` or `washington.csv` from the data
//! directory and converts each row into a [`TripRecord`]. Blank optional
//! cells become `None`; a row whose structure or start time cannot be read
//! fails the whole load.

use std::io::Read;
use std::path::{Path, PathBuf};

use bikeshare_core::catalog::City;
use bikeshare_core::models::TripRecord;
use bikeshare_core::settings::city_path_in;
use bikeshare_core::time_utils::parse_start_time;
use bikeshare_core::{BikeshareError, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::table::TripTable;

/// One CSV row as it appears on disk. Unknown columns (such as the unnamed
/// index column) are ignored; `Gender` and `Birth Year` may be missing
/// entirely.
#[derive(Debug, Deserialize)]
struct RawTripRow {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration", default)]
    trip_duration: Option<f64>,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load `city`'s trip file from `data_dir` into a [`TripTable`] with the
/// calendar fields derived.
pub fn load_city_table(data_dir: &Path, city: City) -> Result<TripTable> {
    let path = city_path_in(data_dir, city);
    let records = load_trips(&path)?;
    Ok(TripTable::new(city, records))
}

/// Open and fully read the trip file at `path`.
pub fn load_trips(path: &Path) -> Result<Vec<TripRecord>> {
    let file = std::fs::File::open(path).map_err(|source| {
        warn!("Failed to read file {}: {}", path.display(), source);
        BikeshareError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let records = read_trips(std::io::BufReader::new(file), path)?;
    debug!("Loaded {} trips from {}", records.len(), path.display());
    Ok(records)
}

/// Parse trip rows from any reader. `source` is only used in error messages.
pub fn read_trips<R: Read>(reader: R, source: &Path) -> Result<Vec<TripRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = result.map_err(|e| csv_error(source, e))?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let raw: RawTripRow =
            row.deserialize(Some(&headers))
                .map_err(|e| BikeshareError::MalformedRecord {
                    path: source.to_path_buf(),
                    line,
                    message: e.to_string(),
                })?;
        records.push(convert_row(raw, source, line)?);
    }

    Ok(records)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn csv_error(source: &Path, err: csv::Error) -> BikeshareError {
    match err.position() {
        Some(pos) => BikeshareError::MalformedRecord {
            path: source.to_path_buf(),
            line: pos.line(),
            message: err.to_string(),
        },
        None => BikeshareError::CsvParse(err),
    }
}

fn convert_row(raw: RawTripRow, source: &Path, line: u64) -> Result<TripRecord> {
    let start_time =
        parse_start_time(&raw.start_time).ok_or_else(|| BikeshareError::MalformedRecord {
            path: PathBuf::from(source),
            line,
            message: format!("invalid Start Time \"{}\"", raw.start_time),
        })?;

    // Only the start time feeds the statistics; an unreadable end time is
    // shown as missing.
    let end_time = raw
        .end_time
        .as_deref()
        .filter(|s| !s.is_empty())
        .and_then(parse_start_time);

    let birth_year = raw
        .birth_year
        .filter(|y| y.is_finite())
        .map(|y| y.round() as i32);

    Ok(TripRecord {
        start_time,
        end_time,
        trip_duration: raw.trip_duration.filter(|d| d.is_finite()),
        start_station: raw.start_station,
        end_station: raw.end_station,
        user_type: raw.user_type.filter(|s| !s.is_empty()),
        gender: raw.gender.filter(|s| !s.is_empty()),
        birth_year,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
