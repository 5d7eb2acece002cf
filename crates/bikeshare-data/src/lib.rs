//! Data layer for the bikeshare explorer.
//!
//! Responsible for reading per-city trip CSV files, filtering trips by month
//! and weekday, and computing the time, station, duration and user
//! statistics for a filtered table.

pub mod aggregator;
pub mod analysis;
pub mod frequency;
pub mod reader;
pub mod table;
