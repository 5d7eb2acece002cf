use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the bikeshare explorer.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// A trip data file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the file structure.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A row was structurally valid CSV but its contents were not usable.
    #[error("Malformed record in {path} at line {line}: {message}")]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// A city, month or day answer is not part of its enumeration.
    #[error("Invalid {kind}: {value}")]
    InvalidSelection { kind: &'static str, value: String },

    /// Standard input reached end-of-file while an answer was expected.
    #[error("Input stream closed")]
    InputClosed,

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the bikeshare crates.
pub type Result<T> = std::result::Result<T, BikeshareError>;

/// Why a single statistic could not be computed.
///
/// Aggregators return this in place of a value instead of dividing by zero
/// or indexing into an empty ranking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    /// The table or column holds no non-missing values.
    #[error("no data")]
    NoData,

    /// Only one distinct value exists where at least two are required.
    #[error("only one {0} category present")]
    SingleCategory(&'static str),

    /// The city's data source does not record this column at all.
    #[error("there is no available {column} data for {city}")]
    NotRecorded { column: &'static str, city: String },
}
