//! Struct definitions and implementations for [`Location`].

use ordered_float::OrderedFloat;

/// A [`Location`] is an interface type that represents a geographic
/// position in degrees. Typically, this type is used in tandem with
/// the [`Place`](`super::place::Place`) type.
///
/// Ordered floats are used so that a location can be hashed and
/// compared like any other key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub latitude: OrderedFloat<f64>,
    pub longitude: OrderedFloat<f64>,
}

impl Location {
    /// Creates a location from plain degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    /// Returns `true` if latitude is within [-90, 90] and longitude is
    /// within [-180, 180].
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude.into_inner())
            && (-180.0..=180.0).contains(&self.longitude.into_inner())
    }
}
