//! Ranking of places against a reference point.
//!
//! Distances are never stored on the loaded [`Place`]s. Instead
//! [`rank`] produces a fresh collection of [`RankedPlace`]s for the
//! reference at hand, so re-ranking against another reference leaves
//! the base data untouched.

use ordered_float::OrderedFloat;

use crate::error::{Error, Result};
use crate::types::location::Location;
use crate::types::place::{Place, RankedPlace};
use crate::utils::haversine;

/// Maximum number of suggestions returned for an unknown reference.
pub const MAX_SUGGESTIONS: usize = 5;

/// Annotates every place with its distance to `reference`, in input
/// order.
pub fn rank<'a>(places: &'a [Place], reference: &Location) -> Vec<RankedPlace<'a>> {
    places
        .iter()
        .map(|place| RankedPlace {
            place,
            distance: OrderedFloat(haversine::distance(reference, &place.location)),
        })
        .collect()
}

/// Finds the place whose identity matches `query`, ignoring case.
///
/// The first match in input order wins. `query` is compared as given,
/// surrounding whitespace included.
///
/// # Errors
/// [`Error::NotFound`] when no identity matches exactly. The error
/// carries up to [`MAX_SUGGESTIONS`] identities that contain `query`
/// as a case-insensitive substring.
pub fn find_reference<'a>(places: &'a [Place], query: &str) -> Result<&'a Place> {
    let needle = query.to_lowercase();
    debug!("(find_reference) looking up '{}'", needle);

    if let Some(place) = places.iter().find(|p| p.uid.to_lowercase() == needle) {
        return Ok(place);
    }

    let suggestions = suggest(places, &needle);
    warn!(
        "(find_reference) '{}' not found, {} suggestion(s)",
        query,
        suggestions.len()
    );
    Err(Error::NotFound {
        query: query.to_string(),
        suggestions,
    })
}

/// See [`find_reference`].
fn suggest(places: &[Place], needle: &str) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();
    if needle.is_empty() {
        return suggestions;
    }
    for place in places {
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
        if place.uid.to_lowercase().contains(needle) && !suggestions.contains(&place.uid) {
            suggestions.push(place.uid.clone());
        }
    }
    suggestions
}

#[cfg(test)]
mod ranking_tests {
    use super::*;

    fn cities() -> Vec<Place> {
        vec![
            Place::new("Paris", 48.8566, 2.3522),
            Place::new("Lyon", 45.7640, 4.8357),
        ]
    }

    #[test]
    fn test_rank_keeps_order_and_base_data() {
        let places = cities();
        let snapshot = places.clone();
        let ranked = rank(&places, &places[1].location);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].uid(), "Paris");
        assert_eq!(ranked[1].distance, OrderedFloat(0.0));
        assert!(ranked[0].distance > OrderedFloat(390.0));
        assert_eq!(places, snapshot);
    }

    #[test]
    fn test_rank_is_repeatable() {
        let places = cities();
        let first = rank(&places, &places[0].location);
        let _other = rank(&places, &places[1].location);
        let again = rank(&places, &places[0].location);
        assert_eq!(first, again);
    }

    #[test]
    fn test_find_reference_ignores_case() {
        let places = cities();
        let found = find_reference(&places, "pARIS").unwrap();
        assert_eq!(found.uid, "Paris");
    }

    #[test]
    fn test_find_reference_first_match_wins() {
        let mut places = cities();
        places.push(Place::new("paris", 33.6609, -95.5555));
        let found = find_reference(&places, "Paris").unwrap();
        assert_eq!(found.location.latitude, OrderedFloat(48.8566));
    }

    #[test]
    fn test_find_reference_does_not_trim() {
        let places = cities();
        match find_reference(&places, " Paris ") {
            Err(Error::NotFound { query, suggestions }) => {
                assert_eq!(query, " Paris ");
                assert!(suggestions.is_empty());
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_not_found_suggestions() {
        let places = cities();
        match find_reference(&places, "Pari") {
            Err(Error::NotFound { query, suggestions }) => {
                assert_eq!(query, "Pari");
                assert_eq!(suggestions, vec!["Paris".to_string()]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    /// The query must be a substring of the identity, not the other way
    /// around.
    #[test]
    fn test_no_suggestions_for_longer_query() {
        let places = cities();
        match find_reference(&places, "Pariss") {
            Err(Error::NotFound { suggestions, .. }) => assert!(suggestions.is_empty()),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_suggestions_are_capped() {
        let places: Vec<Place> = (0..8)
            .map(|i| Place::new(format!("Saint-Denis {}", i), 48.9, 2.35))
            .collect();
        match find_reference(&places, "saint") {
            Err(Error::NotFound { suggestions, .. }) => {
                assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
                assert_eq!(suggestions[0], "Saint-Denis 0");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
