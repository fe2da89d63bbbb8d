use thiserror::Error;

/// Data layer errors
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The external data source failed mid-fetch. Calendar builds treat
    /// this as fatal for the whole query; the caller owns retry policy.
    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    #[error("Seed I/O error: {0}")]
    SeedIo(#[from] std::io::Error),

    #[error("Seed parse error: {0}")]
    SeedParse(#[from] serde_json::Error),
}

pub type DataResult<T> = std::result::Result<T, DataError>;
