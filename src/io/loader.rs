//! Loads [`Place`]s from CSV.
//!
//! The first row must be a header. Three of its columns supply the
//! identity, latitude and longitude of each place; the remaining columns
//! are ignored. Rows that cannot be turned into a valid place are
//! skipped without failing the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{Error, Result};
use crate::types::location::Location;
use crate::types::place::Place;

/// Names of the header columns to read places from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
}

impl Default for Columns {
    fn default() -> Self {
        Columns {
            name: String::from("name"),
            latitude: String::from("latitude"),
            longitude: String::from("longitude"),
        }
    }
}

/// Column positions resolved from the header row.
#[derive(Debug, Copy, Clone)]
struct Indices {
    name: usize,
    latitude: usize,
    longitude: usize,
}

/// Reads places from a CSV file.
pub fn load_from_path<P: AsRef<Path>>(path: P, columns: &Columns) -> Result<Vec<Place>> {
    let path = path.as_ref();
    info!("Loading places from {}", path.display());
    let file = File::open(path)?;
    load_from_reader(file, columns)
}

/// Reads places from any CSV source.
///
/// # Errors
/// * [`Error::MissingColumn`] if the header lacks one of `columns`.
/// * [`Error::EmptyDataset`] if no row holds a valid place.
/// * [`Error::Io`] / [`Error::Csv`] if the source cannot be read.
pub fn load_from_reader<R: Read>(reader: R, columns: &Columns) -> Result<Vec<Place>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let indices = Indices {
        name: column_index(&headers, &columns.name)?,
        latitude: column_index(&headers, &columns.latitude)?,
        longitude: column_index(&headers, &columns.longitude)?,
    };
    debug!("(load_from_reader) column indices: {:?}", indices);

    let mut places = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                debug!("(load_from_reader) unreadable row: {}", e);
                skipped += 1;
                continue;
            }
        };
        match parse_row(&record, indices) {
            Some(place) => places.push(place),
            None => skipped += 1,
        }
    }

    info!("Loaded {} places, skipped {} rows", places.len(), skipped);
    if places.is_empty() {
        return Err(Error::EmptyDataset);
    }
    Ok(places)
}

/// Finds a header column by name, ignoring case and surrounding spaces.
fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    let name = name.trim();
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::MissingColumn(name.to_string()))
}

/// Returns `None` for a missing identity or a missing, non-numeric or
/// out of range coordinate.
fn parse_row(record: &StringRecord, indices: Indices) -> Option<Place> {
    let uid = record.get(indices.name)?.trim();
    if uid.is_empty() {
        return None;
    }
    let latitude = record.get(indices.latitude)?.trim().parse::<f64>().ok()?;
    let longitude = record.get(indices.longitude)?.trim().parse::<f64>().ok()?;

    let location = Location::new(latitude, longitude);
    if !location.is_valid() {
        return None;
    }
    Some(Place {
        uid: uid.to_string(),
        location,
    })
}
