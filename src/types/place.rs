//! Struct definitions and implementations for objects that can be
//! ranked by distance.
//!
//! The base record is a [`Place`]: an identity and a [`Location`], as
//! loaded from a dataset. Once a reference point is chosen, every
//! place is annotated with its distance to that reference, producing a
//! [`RankedPlace`]. The base data is never mutated; ranking against a
//! new reference simply produces a new collection of `RankedPlace`s.
//!
//! Since the sorting algorithms only care about the distance key, we
//! use a [`Ranked`] trait so that they can be agnostic of the record
//! type they reorder.

use ordered_float::OrderedFloat;

use super::location::Location;

/// Anything that carries a distance key the sorting algorithms can
/// compare.
pub trait Ranked {
    /// Returns the distance key, in kilometers.
    fn distance(&self) -> OrderedFloat<f64>;
}

//------------------------------------------------------------------
// Structs and Implementations
//------------------------------------------------------------------

/// A named location as it appears in the input dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Place {
    /// Identity of the place, e.g. a city name. Not required to be
    /// unique; lookups resolve to the first match.
    pub uid: String,

    /// Denotes the geographical position of the place.
    ///
    /// See also [`Location`].
    pub location: Location,
}

impl Place {
    /// Creates a new place.
    pub fn new(uid: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Place {
            uid: uid.into(),
            location: Location::new(latitude, longitude),
        }
    }
}

/// A [`Place`] annotated with its distance to a reference point.
///
/// This is a cheap `Copy` view over the base record, so sequences of
/// it can be duplicated per sorting run without touching the loaded
/// data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RankedPlace<'a> {
    pub place: &'a Place,

    /// Great-circle distance to the reference, in kilometers.
    pub distance: OrderedFloat<f64>,
}

impl<'a> RankedPlace<'a> {
    /// Returns the identity of the underlying place.
    pub fn uid(&self) -> &'a str {
        &self.place.uid
    }

    /// Returns the location of the underlying place.
    pub fn location(&self) -> Location {
        self.place.location
    }
}

impl Ranked for RankedPlace<'_> {
    fn distance(&self) -> OrderedFloat<f64> {
        self.distance
    }
}

impl Ranked for OrderedFloat<f64> {
    fn distance(&self) -> OrderedFloat<f64> {
        *self
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
