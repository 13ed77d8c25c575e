//! CSV writers for rankings and generated datasets.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::types::place::{Place, RankedPlace};

/// One row of an exported ranking.
#[derive(Debug, Serialize)]
pub struct RankingRecord<'a> {
    pub identity: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    /// Kilometers, formatted with two decimals.
    pub distance: String,
}

impl<'a> From<&RankedPlace<'a>> for RankingRecord<'a> {
    fn from(ranked: &RankedPlace<'a>) -> Self {
        RankingRecord {
            identity: ranked.uid(),
            latitude: ranked.place.location.latitude.into_inner(),
            longitude: ranked.place.location.longitude.into_inner(),
            distance: format!("{:.2}", ranked.distance.into_inner()),
        }
    }
}

/// One row of a dataset, in the layout the loader reads by default.
#[derive(Debug, Serialize)]
pub struct PlaceRecord<'a> {
    pub name: &'a str,
    pub latitude: f64,
    pub longitude: f64,
}

impl<'a> From<&'a Place> for PlaceRecord<'a> {
    fn from(place: &'a Place) -> Self {
        PlaceRecord {
            name: &place.uid,
            latitude: place.location.latitude.into_inner(),
            longitude: place.location.longitude.into_inner(),
        }
    }
}

/// Writes a ranking as CSV with the header
/// `identity,latitude,longitude,distance`.
pub fn write_ranking<W: Write>(writer: W, ranking: &[RankedPlace]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for ranked in ranking {
        wtr.serialize(RankingRecord::from(ranked))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes a ranking to `path`. Without a path nothing is written.
pub fn export_to_path(path: Option<&Path>, ranking: &[RankedPlace]) -> Result<()> {
    let Some(path) = path else {
        debug!("(export_to_path) no export path, skipping export");
        return Ok(());
    };
    info!("Exporting {} ranked places to {}", ranking.len(), path.display());
    write_ranking(File::create(path)?, ranking)
}

/// Writes places as a `name,latitude,longitude` dataset.
pub fn write_places<W: Write>(writer: W, places: &[Place]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for place in places {
        wtr.serialize(PlaceRecord::from(place))?;
    }
    wtr.flush()?;
    Ok(())
}
