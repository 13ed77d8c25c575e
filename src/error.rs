//! Error type shared by the library and the binary.

use thiserror::Error;

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("The dataset has no column named '{0}'")]
    MissingColumn(String),
    #[error("The dataset does not contain any valid location")]
    EmptyDataset,
    #[error("Location '{query}' not found")]
    NotFound {
        query: String,
        suggestions: Vec<String>,
    },
    #[error("At least 2 ranked locations are required, got {0}")]
    TooFewLocations(usize),
    #[error("Invalid benchmark size '{0}'")]
    InvalidSize(String),
    #[error("Invalid coordinates ({latitude}, {longitude})")]
    InvalidLocation { latitude: f64, longitude: f64 },
}
