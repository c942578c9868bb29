//! Error types for sheetcalc-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding addresses and ranges
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Range whose end precedes its start
    #[error("Invalid cell range: {end} precedes {start}")]
    InvalidRange { start: String, end: String },

    /// Range covering more cells than [`MAX_RANGE_CELLS`](crate::MAX_RANGE_CELLS)
    #[error("Cell range {range} covers {cells} cells, more than the limit of {limit}")]
    RangeTooLarge { range: String, cells: u64, limit: u64 },
}

impl Error {
    /// Create an invalid-address error for the given text
    pub fn invalid_address<S: Into<String>>(text: S) -> Self {
        Error::InvalidAddress(text.into())
    }
}
