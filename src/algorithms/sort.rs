//! Sorting algorithms that order [`Ranked`] records by distance.
//!
//! Every algorithm borrows its input and returns a freshly allocated,
//! ascending sequence. The input is never reordered, so the same slice
//! can be handed to several algorithms one after another.
//!
//! Only the distance key takes part in comparisons. Records with equal
//! distance keep their input order in [`insertion_sort`] and
//! [`merge_sort`]; [`quick_sort`] makes no such promise.

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

use crate::types::place::Ranked;

/// The sorting algorithms available for ranking and benchmarking.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Insertion sort, *O*(*n^2*).
    Insertion,
    /// Quick sort with a three-way partition around the middle element.
    Quick,
    /// Top-down merge sort, *O*(*n* log *n*).
    Merge,
}

impl Algorithm {
    /// All algorithms, in the order they are benchmarked and reported.
    pub const ALL: [Algorithm; 3] = [Algorithm::Insertion, Algorithm::Quick, Algorithm::Merge];

    /// Human readable name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
        }
    }

    /// Sorts `items` with this algorithm.
    pub fn sort<T: Ranked + Clone>(&self, items: &[T]) -> Vec<T> {
        match self {
            Algorithm::Insertion => insertion_sort(items),
            Algorithm::Quick => quick_sort(items),
            Algorithm::Merge => merge_sort(items),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sorts a copy of `items` by insertion.
///
/// Stable. Each element is swapped towards the front while its
/// predecessor is strictly farther away.
///
/// # Time Complexity
/// *O*(*n^2*) in the average and worst case, *O*(*n*) on sorted input.
pub fn insertion_sort<T: Ranked + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    for i in 1..sorted.len() {
        let mut j = i;
        while j > 0 && sorted[j].distance() < sorted[j - 1].distance() {
            sorted.swap(j - 1, j);
            j -= 1;
        }
    }
    sorted
}

/// Sorts `items` with a recursive three-way quick sort.
///
/// The element at the middle index is the pivot. Elements strictly
/// closer than the pivot, equal to it, and strictly farther are
/// collected into three partitions; the outer two are sorted
/// recursively and the results concatenated.
///
/// # Time Complexity
/// *O*(*n* log *n*) on average, *O*(*n^2*) when the middle element is
/// repeatedly an extreme of its partition.
pub fn quick_sort<T: Ranked + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }

    let pivot = items[items.len() / 2].distance();
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for item in items {
        let distance = item.distance();
        if distance < pivot {
            less.push(item.clone());
        } else if distance == pivot {
            equal.push(item.clone());
        } else {
            greater.push(item.clone());
        }
    }

    let mut sorted = quick_sort(&less);
    sorted.append(&mut equal);
    sorted.append(&mut quick_sort(&greater));
    sorted
}

/// Sorts `items` with a recursive top-down merge sort.
///
/// The input is split at its midpoint, both halves are sorted and then
/// merged. On ties the left head is taken first, which makes the sort
/// stable.
///
/// # Time Complexity
/// *O*(*n* log *n*) in every case.
pub fn merge_sort<T: Ranked + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid]);
    let right = merge_sort(&items[mid..]);
    merge(left, right)
}

/// See [`merge_sort`].
fn merge<T: Ranked>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l.distance() <= r.distance(),
            _ => break,
        };
        if take_left {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod sort_tests {
    use super::*;
    use ordered_float::OrderedFloat;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// A record whose tag remembers its original position.
    #[derive(Debug, Clone, PartialEq)]
    struct Tagged {
        tag: usize,
        distance: OrderedFloat<f64>,
    }

    impl Ranked for Tagged {
        fn distance(&self) -> OrderedFloat<f64> {
            self.distance
        }
    }

    fn tagged(distances: &[f64]) -> Vec<Tagged> {
        distances
            .iter()
            .enumerate()
            .map(|(tag, d)| Tagged {
                tag,
                distance: OrderedFloat(*d),
            })
            .collect()
    }

    /// Random distances drawn from a small range so that ties are common.
    fn random_tagged(rng: &mut StdRng, len: usize) -> Vec<Tagged> {
        let distances: Vec<f64> = (0..len).map(|_| rng.gen_range(0..25) as f64).collect();
        tagged(&distances)
    }

    fn is_non_decreasing(items: &[Tagged]) -> bool {
        items.windows(2).all(|w| w[0].distance <= w[1].distance)
    }

    fn sorted_distances(items: &[Tagged]) -> Vec<OrderedFloat<f64>> {
        let mut distances: Vec<_> = items.iter().map(|t| t.distance).collect();
        distances.sort();
        distances
    }

    fn sorted_tags(items: &[Tagged]) -> Vec<usize> {
        let mut tags: Vec<_> = items.iter().map(|t| t.tag).collect();
        tags.sort();
        tags
    }

    /// Equal-distance records must appear in increasing tag order.
    fn is_stable(items: &[Tagged]) -> bool {
        items
            .windows(2)
            .all(|w| w[0].distance < w[1].distance || w[0].tag < w[1].tag)
    }

    #[test]
    fn test_empty_and_single() {
        for algorithm in Algorithm::ALL {
            assert!(algorithm.sort::<Tagged>(&[]).is_empty());
            let single = tagged(&[3.0]);
            assert_eq!(algorithm.sort(&single), single);
        }
    }

    #[test]
    fn test_small_input() {
        let items = tagged(&[5.0, 1.0, 4.0, 2.0, 3.0]);
        for algorithm in Algorithm::ALL {
            let sorted = algorithm.sort(&items);
            let distances: Vec<f64> = sorted.iter().map(|t| t.distance.into_inner()).collect();
            assert_eq!(distances, vec![1.0, 2.0, 3.0, 4.0, 5.0], "{}", algorithm);
        }
    }

    #[test]
    fn test_same_multiset_and_order() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [0, 1, 2, 3, 10, 57, 200] {
            let items = random_tagged(&mut rng, len);
            for algorithm in Algorithm::ALL {
                let sorted = algorithm.sort(&items);
                assert_eq!(sorted.len(), items.len(), "{}", algorithm);
                assert!(is_non_decreasing(&sorted), "{}", algorithm);
                assert_eq!(sorted_distances(&sorted), sorted_distances(&items));
                assert_eq!(sorted_tags(&sorted), sorted_tags(&items));
            }
        }
    }

    #[test]
    fn test_input_is_untouched() {
        let mut rng = StdRng::seed_from_u64(11);
        let items = random_tagged(&mut rng, 64);
        let snapshot = items.clone();
        for algorithm in Algorithm::ALL {
            let _ = algorithm.sort(&items);
            assert_eq!(items, snapshot, "{}", algorithm);
        }
    }

    #[test]
    fn test_insertion_and_merge_are_stable() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let items = random_tagged(&mut rng, 120);
            assert!(is_stable(&insertion_sort(&items)));
            assert!(is_stable(&merge_sort(&items)));
        }
    }

    #[test]
    fn test_sorted_input_is_unchanged() {
        let mut rng = StdRng::seed_from_u64(3);
        let items = merge_sort(&random_tagged(&mut rng, 150));
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.sort(&items), items, "{}", algorithm);
        }
    }

    #[test]
    fn test_reverse_sorted_input() {
        let distances: Vec<f64> = (0..300).rev().map(|d| d as f64).collect();
        let items = tagged(&distances);
        for algorithm in Algorithm::ALL {
            let sorted = algorithm.sort(&items);
            assert!(is_non_decreasing(&sorted), "{}", algorithm);
            assert_eq!(sorted[0].tag, 299);
        }
    }

    #[test]
    fn test_all_equal() {
        let items = tagged(&[7.0; 50]);
        for algorithm in Algorithm::ALL {
            assert_eq!(sorted_tags(&algorithm.sort(&items)), sorted_tags(&items));
        }
        assert_eq!(insertion_sort(&items), items);
        assert_eq!(merge_sort(&items), items);
    }

    #[test]
    fn test_plain_ordered_floats() {
        let items = vec![OrderedFloat(2.5), OrderedFloat(-1.0), OrderedFloat(0.0)];
        assert_eq!(
            quick_sort(&items),
            vec![OrderedFloat(-1.0), OrderedFloat(0.0), OrderedFloat(2.5)]
        );
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::Insertion.to_string(), "Insertion Sort");
        assert_eq!(Algorithm::Quick.name(), "Quick Sort");
        assert_eq!(Algorithm::Merge.name(), "Merge Sort");
    }
}
