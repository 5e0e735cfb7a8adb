// File: crates/termgraph-core/src/error.rs
// Summary: Error types for configuration, input data and output failures.

use thiserror::Error;

/// Rejected option combinations. Raised before any data is read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`{0}` and `{1}` cannot be used together")]
    ConflictingModes(&'static str, &'static str),
    #[error("calendar mode requires a start date")]
    MissingStartDate,
    #[error("invalid start date `{0}`: expected an RFC 3339 timestamp or YYYY-MM-DD")]
    InvalidStartDate(String),
    #[error("width must be a positive integer")]
    ZeroWidth,
    #[error("invalid format template `{template}`: {reason}")]
    InvalidFormat { template: String, reason: String },
    #[error("unknown colour `{0}`")]
    UnknownColour(String),
}

/// Input that cannot be turned into a consistent dataset.
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("line {line}: `{field}` is not a number")]
    NotANumber { line: usize, field: String },
    #[error("line {line}: `{field}` is not a finite value")]
    NonFinite { line: usize, field: String },
    #[error("line {line}: expected {expected} value(s), found {found}")]
    Arity { line: usize, expected: usize, found: usize },
    #[error("line {line}: `{field}` is not a date")]
    InvalidDate { line: usize, field: String },
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("line {line}: row has no values")]
    MissingValues { line: usize },
    #[error("{labels} labels but {rows} rows of values")]
    LabelCount { labels: usize, rows: usize },
    #[error("{found} colour(s) given for {expected} series")]
    ColourCount { expected: usize, found: usize },
    #[error("{found} category name(s) given for {expected} series")]
    CategoryCount { expected: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
