//! Location Ranking Library.
//! Ranks places by great-circle distance to a reference place and
//! compares the runtime of classic sorting algorithms on the ranking.

#[macro_use]
extern crate log;

pub mod config;
pub mod error;

pub mod types {
    pub mod location;
    pub mod place;
}

pub mod algorithms {
    pub mod benchmark;
    pub mod quantile;
    pub mod sort;
}

pub mod utils {
    pub mod generator;
    pub mod haversine;
    pub mod pipeline;
    pub mod ranking;
}

pub mod io {
    pub mod export;
    pub mod loader;
    pub mod report;
}

pub use crate::algorithms::sort::Algorithm;
pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::types::location::Location;
pub use crate::types::place::{Place, Ranked, RankedPlace};
