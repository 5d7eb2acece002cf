//! Shared types for the bikeshare explorer: the fixed city/month/day
//! catalog, trip records, errors, settings and display helpers.

pub mod catalog;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{BikeshareError, Result, Unavailable};
