//! Plain-text tables for trip rows and frequency counts.
//!
//! Columns are right-aligned and separated by two spaces, sized by display
//! width so station names with non-ASCII characters line up.

use unicode_width::UnicodeWidthStr;

use bikeshare_core::catalog::City;
use bikeshare_core::models::Trip;
use bikeshare_core::time_utils::{month_name, weekday_name};
use bikeshare_data::table::TripTable;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const ELLIPSIS: &str = "...";

/// Header labels for `city`, starting with the unnamed row-number column.
pub fn column_names(city: City) -> Vec<&'static str> {
    let mut names = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if city.has_demographics() {
        names.extend(["Gender", "Birth Year"]);
    }
    names.extend(["month", "day_of_week"]);
    names
}

/// Display cells for one trip, matching [`column_names`].
pub fn trip_cells(trip: &Trip, city: City) -> Vec<String> {
    let r = &trip.record;
    let mut cells = vec![
        trip.row.to_string(),
        r.start_time.format(TIMESTAMP_FORMAT).to_string(),
        r.end_time
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_else(|| "-".to_string()),
        r.trip_duration
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string()),
        r.start_station.clone(),
        r.end_station.clone(),
        r.user_type.clone().unwrap_or_else(|| "-".to_string()),
    ];
    if city.has_demographics() {
        cells.push(r.gender.clone().unwrap_or_else(|| "-".to_string()));
        cells.push(
            r.birth_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
    }
    cells.push(month_name(trip.month).to_string());
    cells.push(weekday_name(trip.day_of_week).to_string());
    cells
}

/// Render `trips` with a header row.
pub fn render_trips(trips: &[Trip], city: City) -> String {
    let rows = trips.iter().map(|t| trip_cells(t, city)).collect();
    render_grid(header(city), rows)
}

/// Render the first and last `edge` trips of `table`, with an elision row
/// between them when rows are skipped, and a size footer.
pub fn render_preview(table: &TripTable, edge: usize) -> String {
    let city = table.city();
    let header = header(city);
    let width = header.len();
    let trips = table.trips();

    let rows: Vec<Vec<String>> = if trips.len() <= edge * 2 {
        trips.iter().map(|t| trip_cells(t, city)).collect()
    } else {
        let head = trips[..edge].iter().map(|t| trip_cells(t, city));
        let gap = std::iter::once(vec![ELLIPSIS.to_string(); width]);
        let tail = trips[trips.len() - edge..].iter().map(|t| trip_cells(t, city));
        head.chain(gap).chain(tail).collect()
    };

    format!(
        "{}\n\n[{} rows x {} columns]",
        render_grid(header, rows),
        trips.len(),
        width - 1
    )
}

/// Render `(value, count)` pairs as two aligned columns.
pub fn render_counts(counts: &[(String, usize)]) -> String {
    let label_width = counts.iter().map(|(v, _)| v.width()).max().unwrap_or(0);
    let count_width = counts
        .iter()
        .map(|(_, c)| c.to_string().len())
        .max()
        .unwrap_or(0);

    counts
        .iter()
        .map(|(value, count)| {
            format!(
                "{}  {:>cw$}",
                pad_right(value, label_width),
                count,
                cw = count_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn header(city: City) -> Vec<String> {
    column_names(city).into_iter().map(str::to_string).collect()
}

fn render_grid(header: Vec<String>, rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    std::iter::once(&header)
        .chain(rows.iter())
        .map(|cells| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, w)| pad_left(cell, *w))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(fill), s)
}

fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
