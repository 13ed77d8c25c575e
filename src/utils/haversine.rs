//! Implementation of the Haversine formula for calculating the distance
//! between two points on a sphere.
//!
//! See [Wikipedia](https://en.wikipedia.org/wiki/Haversine_formula) for
//! more.
//!
//! **Distance is returned in kilometers**.

use crate::types::location::Location;

/// Mean radius of the Earth in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the distance between two points on a sphere.
///
/// # Notes
/// Coordinates outside of the valid latitude and longitude ranges are
/// not rejected; the result is then meaningless.
pub fn distance(start: &Location, end: &Location) -> f64 {
    let (lat1, lon1) = (start.latitude.into_inner(), start.longitude.into_inner());
    let (lat2, lon2) = (end.latitude.into_inner(), end.longitude.into_inner());
    let half_d_lat = ((lat2 - lat1).to_radians() / 2.0).sin();
    let half_d_lon = ((lon2 - lon1).to_radians() / 2.0).sin();

    // two-factor product first: swapping the points must round identically
    let cos_product = lat1.to_radians().cos() * lat2.to_radians().cos();
    // rounding can push near-antipodal points just past 1
    let a = (half_d_lat * half_d_lat + cos_product * (half_d_lon * half_d_lon)).clamp(0.0, 1.0);

    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
pub mod haversine_test {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::f64::consts::PI;

    #[test]
    fn haversine_distance_in_kilometers() {
        let start = Location::new(38.898556, -77.037852);
        let end = Location::new(38.897147, -77.043934);
        assert!((distance(&start, &end) - 0.549_156).abs() < 1e-5);
    }

    #[test]
    fn haversine_paris_to_lyon() {
        let paris = Location::new(48.8566, 2.3522);
        let lyon = Location::new(45.7640, 4.8357);
        let d = distance(&paris, &lyon);
        assert!((d - 391.5).abs() < 1.0, "unexpected distance {}", d);
    }

    fn random_location(rng: &mut StdRng) -> Location {
        Location::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0))
    }

    #[test]
    fn haversine_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20_000 {
            let a = random_location(&mut rng);
            let b = random_location(&mut rng);
            assert_eq!(distance(&a, &b), distance(&b, &a), "{:?} / {:?}", a, b);
        }
    }

    #[test]
    fn haversine_same_point_is_zero() {
        let point = Location::new(37.777843, -122.468207);
        assert_eq!(distance(&point, &point), 0.0);
    }

    #[test]
    fn haversine_antipodes() {
        let a = Location::new(0.0, 0.0);
        let b = Location::new(0.0, 180.0);
        let half_circumference = PI * EARTH_RADIUS_KM;
        assert!((distance(&a, &b) - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn haversine_near_antipodes_is_finite() {
        let half_circumference = PI * EARTH_RADIUS_KM;
        let a = Location::new(85.75202851856307, -67.54058861719409);
        let b = Location::new(-85.75202851856307, 112.45941138280591);
        assert!((distance(&a, &b) - half_circumference).abs() < 1e-6);

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100_000 {
            let start = random_location(&mut rng);
            let lon = start.longitude.into_inner();
            let opposite = Location::new(
                -start.latitude.into_inner(),
                if lon > 0.0 { lon - 180.0 } else { lon + 180.0 },
            );
            let d = distance(&start, &opposite);
            assert!(!d.is_nan(), "NaN for {:?}", start);
            assert!(d > 0.0 && d <= half_circumference + 1e-6, "{} for {:?}", d, start);
        }
    }
}
