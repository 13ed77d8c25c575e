//! A number of methods to generate random places, used to build
//! synthetic datasets and test fixtures.
//!
//! All functions take the random number generator as an argument so
//! that a seeded generator yields a reproducible dataset.

use std::collections::HashSet;

use rand::Rng;
use uuid::Builder;

use crate::types::location::Location;
use crate::types::place::Place;
use crate::utils::haversine::EARTH_RADIUS_KM;

/// Generate a vector of random places near a location.
///
/// # Arguments
/// * `rng` - The random number generator.
/// * `location` - The location to generate places near.
/// * `radius` - The radius in kilometers to generate places within.
/// * `capacity` - The number of places to generate.
///
/// # Returns
/// A vector of places with unique identities.
pub fn generate_places_near<R: Rng>(
    rng: &mut R,
    location: &Location,
    radius: f64,
    capacity: usize,
) -> Vec<Place> {
    let mut places = Vec::with_capacity(capacity);
    let mut uid_set = HashSet::<String>::new();
    while places.len() < capacity {
        let place = generate_random_place_near(rng, location, radius);
        if uid_set.insert(place.uid.clone()) {
            places.push(place);
        }
    }
    places
}

/// Generate a random place near a location within radius in kilometers.
///
/// # Caution
/// The identity is a random UUID and is not checked for uniqueness.
pub fn generate_random_place_near<R: Rng>(rng: &mut R, location: &Location, radius: f64) -> Place {
    let uid = Builder::from_random_bytes(rng.gen()).into_uuid().to_string();
    Place {
        uid,
        location: generate_location_near(rng, location, radius),
    }
}

/// Generate a random location anywhere on earth.
pub fn generate_location<R: Rng>(rng: &mut R) -> Location {
    Location::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0))
}

/// Generate a random location near a given location and radius.
///
/// A random bearing and a random great-circle distance up to `radius`
/// are drawn, then the destination point is computed on the sphere.
/// The square root keeps the points uniformly spread over the disc.
pub fn generate_location_near<R: Rng>(rng: &mut R, location: &Location, radius: f64) -> Location {
    let bearing: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let distance: f64 = radius * rng.gen::<f64>().sqrt();
    let delta = distance / EARTH_RADIUS_KM;

    let lat1 = location.latitude.into_inner().to_radians();
    let lon1 = location.longitude.into_inner().to_radians();

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    // wrap into [-180, 180)
    let longitude = (lon2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    Location::new(lat2.to_degrees().clamp(-90.0, 90.0), longitude)
}
