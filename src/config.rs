//! # Config
//!
//! Define and implement config options for the ranker

use config::{ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;

use crate::algorithms::sort::Algorithm;
use crate::error::{Error, Result};
use crate::io::loader::Columns;

/// struct holding configuration options
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// dataset column holding the identity of a place
    pub name_column: String,

    /// dataset column holding the latitude in degrees
    pub latitude_column: String,

    /// dataset column holding the longitude in degrees
    pub longitude_column: String,

    /// comma separated benchmark sizes
    pub sizes: String,

    /// algorithm used to rank the full dataset
    pub algorithm: Algorithm,
}

impl Default for Config {
    fn default() -> Self {
        log::debug!("(default) Creating Config object with default values.");
        Self::new()
    }
}

impl Config {
    /// Default values for Config
    pub fn new() -> Self {
        Config {
            name_column: String::from("name"),
            latitude_column: String::from("latitude"),
            longitude_column: String::from("longitude"),
            sizes: String::from("100,500,1000,2000,3000"),
            algorithm: Algorithm::Merge,
        }
    }

    /// Create a new `Config` object using `RANKER_*` environment
    /// variables, e.g. `RANKER_SIZES=10,20,30`.
    pub fn try_from_env() -> std::result::Result<Self, ConfigError> {
        // read .env file if present
        dotenv().ok();
        let default_config = Config::default();

        config::Config::builder()
            .set_default("name_column", default_config.name_column)?
            .set_default("latitude_column", default_config.latitude_column)?
            .set_default("longitude_column", default_config.longitude_column)?
            .set_default("sizes", default_config.sizes)?
            .set_default("algorithm", "merge")?
            .add_source(Environment::with_prefix("RANKER"))
            .build()?
            .try_deserialize()
    }

    /// The dataset columns to read places from.
    pub fn columns(&self) -> Columns {
        Columns {
            name: self.name_column.clone(),
            latitude: self.latitude_column.clone(),
            longitude: self.longitude_column.clone(),
        }
    }

    /// Parses [`Config::sizes`]. Empty entries are ignored.
    pub fn benchmark_sizes(&self) -> Result<Vec<usize>> {
        parse_sizes(&self.sizes)
    }
}

/// Parses a comma separated list of positive sizes.
pub fn parse_sizes(sizes: &str) -> Result<Vec<usize>> {
    sizes
        .split(',')
        .map(str::trim)
        .filter(|size| !size.is_empty())
        .map(|size| match size.parse::<usize>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(Error::InvalidSize(size.to_string())),
        })
        .collect()
}
