// src/error.rs

use thiserror::Error;

/// Result type alias used across the forecaster.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Everything that can abort a forecast.
#[derive(Error, Debug)]
pub enum ForecastError {
    /// Malformed inputs: mismatched sequences, negative values, bad ratios or run counts.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The distinct-integer pool cannot be drawn from the sampling range.
    #[error(
        "Sampling range [{start}, {end}] holds {available} distinct values, \
         but a pool of {requested} was requested"
    )]
    RangeExhausted {
        requested: usize,
        available: u64,
        start: i64,
        end: i64,
    },

    /// Summarizing a results table with no rows.
    #[error("Cannot summarize an empty results table")]
    EmptyTable,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ForecastError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
